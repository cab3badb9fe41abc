mod test_bfs;
