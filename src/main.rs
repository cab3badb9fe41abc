use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use coauthor_graph::config::{load_config, Config};
use coauthor_graph::gateway::arxiv::ArxivGateway;
use coauthor_graph::graph::builder::{build_author_graph, DuplicatePolicy};
use coauthor_graph::graph::dot::{DotRenderer, GraphRenderer};
use coauthor_graph::graph::CoauthorGraph;
use coauthor_graph::logger::{self, init_logger, StdoutLogger};
use coauthor_graph::record::{ArticleRecord, ArticleSet, AuthorName};
use coauthor_graph::traversal::crawl_coauthor_network;

#[derive(Parser)]
#[command(name = "coauthor-graph")]
#[command(about = "Co-authorship network crawler for the arXiv search API", long_about = None)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the co-author network rooted at an author
    Crawl {
        /// Root author name to start the traversal from
        author: String,
        /// Maximum BFS depth
        #[arg(long)]
        max_depth: Option<usize>,
        /// Result cap per search query
        #[arg(long)]
        max_results: Option<usize>,
        /// Drop repeat appearances of the same article id before building
        /// the graph
        #[arg(long)]
        dedupe: bool,
        /// Write the Graphviz DOT rendering here (stdout if omitted)
        #[arg(long)]
        dot_out: Option<PathBuf>,
        /// Also write the raw article records as JSON here
        #[arg(long)]
        articles_out: Option<PathBuf>,
    },
    /// Build a graph from a saved article dump
    Build {
        /// JSON file of article records (authors may be a list or a
        /// serialized list string)
        input: PathBuf,
        /// Drop repeat appearances of the same article id
        #[arg(long)]
        dedupe: bool,
        /// Author to highlight in the rendering
        #[arg(long)]
        highlight: Option<String>,
        /// Write the Graphviz DOT rendering here (stdout if omitted)
        #[arg(long)]
        dot_out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(StdoutLogger::default());

    let cli = Cli::parse();
    let config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Crawl {
            author,
            max_depth,
            max_results,
            dedupe,
            dot_out,
            articles_out,
        } => {
            let root = AuthorName::new(&author);
            let max_depth = max_depth.unwrap_or(config.crawl.max_depth);
            let max_results = max_results.unwrap_or(config.crawl.max_results);
            let policy = resolve_policy(dedupe, &config);

            let gateway = ArxivGateway::with_config(config.arxiv.clone());
            let outcome = crawl_coauthor_network(&gateway, &root, max_depth, max_results).await?;

            logger::info(&format!(
                "crawl finished: {} articles, {} authors discovered, {} expanded",
                outcome.articles.len(),
                outcome.discovered.len(),
                outcome.authors_expanded
            ));

            if let Some(path) = articles_out {
                let json = serde_json::to_string_pretty(outcome.articles.records())?;
                fs::write(&path, json)?;
                logger::info(&format!("wrote articles to {}", path.display()));
            }

            let graph = build_author_graph(&outcome.articles, policy);
            emit_graph(&graph, Some(&root), dot_out.as_deref())?;
        }
        Commands::Build {
            input,
            dedupe,
            highlight,
            dot_out,
        } => {
            let content = fs::read_to_string(&input)?;
            let records: Vec<ArticleRecord> = serde_json::from_str(&content)?;
            let articles = ArticleSet::from(records);
            let policy = resolve_policy(dedupe, &config);

            let graph = build_author_graph(&articles, policy);
            let highlight = highlight.map(|name| AuthorName::new(&name));
            emit_graph(&graph, highlight.as_ref(), dot_out.as_deref())?;
        }
    }

    Ok(())
}

fn resolve_policy(dedupe: bool, config: &Config) -> DuplicatePolicy {
    if dedupe {
        DuplicatePolicy::DedupeById
    } else {
        config.crawl.duplicate_policy
    }
}

fn emit_graph(
    graph: &CoauthorGraph,
    highlight: Option<&AuthorName>,
    dot_out: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    logger::info(&format!(
        "graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    ));

    let dot = DotRenderer.render(graph, highlight);
    match dot_out {
        Some(path) => {
            fs::write(path, dot)?;
            logger::info(&format!("wrote graph to {}", path.display()));
        }
        None => print!("{}", dot),
    }
    Ok(())
}
