use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use review_digest::batch;
use review_digest::DigestConfig;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = DigestConfig::default().validated()?;
    let corpus = config
        .corpus
        .provider()
        .acquire()
        .context("loading the tokenizer corpus")?;
    info!(abbreviations = corpus.len(), "tokenizer corpus ready");

    let report = batch::run_configured(&corpus, &config)?;

    println!("{report}");
    Ok(())
}
