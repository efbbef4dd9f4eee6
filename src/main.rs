use std::sync::Arc;

use anyhow::Result;
use charvec::{Alphabet, Ranker, ReferenceCorpus};
use clap::Parser;
use tracing::info;

/// Queries ranked when none are given on the command line
const DEMO_QUERIES: [&str; 3] = [
    "cadastro",
    "ativacao",
    "asdhfu asd ofaisd foias dfj asdf asd fasd f",
];

/// Rank reference labels by character-frequency cosine similarity.
///
/// Without arguments, ranks the three demo queries against the demo labels.
#[derive(Parser)]
#[command(name = "charvec", version, about)]
struct Cli {
    /// Query texts (default: the demo queries)
    queries: Vec<String>,

    /// Reference label, vectorized from its own text (repeatable; default: demo labels)
    #[arg(long = "label", value_name = "LABEL")]
    labels: Vec<String>,

    /// Show only the first N labels of each ranking
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Pad labels into a column instead of tab-separating
    #[arg(long)]
    aligned: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("charvec=info")),
        )
        .init();

    let cli = Cli::parse();

    let corpus = if cli.labels.is_empty() {
        ReferenceCorpus::demo()
    } else {
        ReferenceCorpus::from_labels(Arc::new(Alphabet::reference()), &cli.labels)?
    };
    info!(labels = corpus.len(), dim = corpus.alphabet().len(), "reference corpus ready");
    let ranker = Ranker::new(Arc::new(corpus));

    // demo queries print bare results, like the original output
    let with_header = !cli.queries.is_empty();
    let view = View {
        header: with_header,
        limit: cli.limit,
        aligned: cli.aligned,
    };
    let queries: Vec<&str> = if cli.queries.is_empty() {
        DEMO_QUERIES.to_vec()
    } else {
        cli.queries.iter().map(String::as_str).collect()
    };

    for query in queries {
        print!("{}", view.render(&ranker, query));
    }
    Ok(())
}

/// How one ranking is printed
struct View {
    header: bool,
    limit: Option<usize>,
    aligned: bool,
}

impl View {
    /// Ranking of `query` followed by a blank line
    fn render(&self, ranker: &Ranker, query: &str) -> String {
        let mut result = ranker.rank(query);
        if let Some(limit) = self.limit {
            result.list.truncate(limit);
        }
        let mut out = String::new();
        if self.header {
            out.push_str(&format!("# {query}\n"));
        }
        if self.aligned {
            out.push_str(&format!("{result:#}"));
        } else {
            out.push_str(&format!("{result}"));
        }
        out.push('\n');
        out
    }
}
