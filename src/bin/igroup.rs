//! igroup: group near-duplicate records from a delimited file.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use issue_grouper::{
    parse_delimiter, render, ClusterConfig, ClusterEngine, ClusterSummary, Corpus, RecordReader,
    ReportFormat, ReportOptions,
};

#[derive(Parser)]
#[command(
    name = "igroup",
    about = "Cluster short free-text records into near-duplicate groups",
    version
)]
struct Cli {
    /// Input file with one record per row
    #[arg(default_value = "data/result.csv")]
    path: PathBuf,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum accumulated TF-IDF overlap score to group two records
    #[arg(long)]
    threshold: Option<f64>,

    /// Minimum distinct terms for a record to be considered at all
    #[arg(long)]
    min_length: Option<usize>,

    /// Zero-based column holding the numeric record key
    #[arg(long, default_value_t = 0)]
    key_column: usize,

    /// Zero-based column holding the record text
    #[arg(long, default_value_t = 2)]
    text_column: usize,

    /// Field delimiter: one ASCII character, `\t` or `tab`
    #[arg(long, default_value = ",", value_parser = delimiter_arg)]
    delimiter: u8,

    /// Skip the first row
    #[arg(long)]
    has_headers: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also print records that matched nothing
    #[arg(long)]
    include_singletons: bool,

    /// Print group counts to stderr
    #[arg(long)]
    summary: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn delimiter_arg(value: &str) -> std::result::Result<u8, String> {
    parse_delimiter(value).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = match &cli.config {
        Some(path) => ClusterConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ClusterConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config = config.with_threshold(threshold);
    }
    if let Some(min_length) = cli.min_length {
        config = config.with_min_document_length(min_length);
    }
    config.validate()?;

    let reader = RecordReader {
        key_column: cli.key_column,
        text_column: cli.text_column,
        delimiter: cli.delimiter,
        has_headers: cli.has_headers,
    };
    let records = reader
        .read_path(&cli.path)
        .with_context(|| format!("reading records from {}", cli.path.display()))?;

    let mut corpus: Corpus<u64> = Corpus::from_config(&config);
    let stats = corpus.load_all(records.records);
    info!(
        "loaded {} documents ({} replaced, {} too short, {} malformed)",
        corpus.len(),
        stats.replaced,
        stats.too_short,
        records.skipped
    );

    let clusters = ClusterEngine::from_config(&config).cluster(&mut corpus);

    let options = ReportOptions {
        format: match cli.format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        },
        include_singletons: cli.include_singletons,
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&mut out, &corpus, &clusters, options)?;
    out.flush()?;

    if cli.summary {
        let summary = ClusterSummary::from_clusters(&clusters);
        eprintln!(
            "{} documents, {} groups covering {} documents, {} singletons ({:.1}% isolated)",
            summary.documents,
            summary.clusters,
            summary.clustered_documents,
            summary.singletons,
            summary.isolation_rate() * 100.0
        );
    }

    Ok(())
}
