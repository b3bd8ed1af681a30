// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use docintel::utils::logging::{
    format_error, format_heading, format_info, format_success, format_warning,
};
use docintel::{
    Config, FrequencySummarizer, HttpEmbeddingClient, JsonExporter, QueryEngine, QueryOutcome,
    RankingPolicy, SummaryPipeline, Validator, database,
};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Characters of evidence text shown under each supporting item.
const EVIDENCE_PREVIEW_CHARS: usize = 300;

#[derive(Parser)]
#[command(name = "docintel")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Evidence retrieval and answer synthesis over a document vector store", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single question
    Ask {
        question: String,

        #[arg(short = 'k', long, value_name = "NUM")]
        top_k: Option<usize>,

        #[arg(long, value_name = "SCORE")]
        min_score: Option<f32>,

        /// Also write the answer and evidence as JSON into this directory
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Interactive question loop; type 'exit' or 'quit' to leave
    Repl {
        #[arg(short = 'k', long, value_name = "NUM")]
        top_k: Option<usize>,

        #[arg(long, value_name = "SCORE")]
        min_score: Option<f32>,
    },

    /// Show corpus statistics
    Stats,

    /// Write extractive summaries for structured document JSON files
    Summarize {
        input: PathBuf,

        #[arg(short, long, default_value = "./summaries")]
        output: PathBuf,

        #[arg(short = 'n', long, default_value_t = 5)]
        sentences: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    docintel::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Ask {
            question,
            top_k,
            min_score,
            export,
            pretty,
        } => {
            cmd_ask(&config, &question, top_k, min_score, export, pretty).await?;
        }
        Commands::Repl { top_k, min_score } => {
            cmd_repl(&config, top_k, min_score).await?;
        }
        Commands::Stats => {
            cmd_stats(&config).await?;
        }
        Commands::Summarize {
            input,
            output,
            sentences,
        } => {
            cmd_summarize(&input, output, sentences)?;
        }
    }

    Ok(())
}

async fn build_engine(config: &Config) -> Result<QueryEngine<HttpEmbeddingClient>> {
    let corpus = database::load_corpus(&config.corpus)
        .await
        .context("Failed to load corpus")?;

    if corpus.is_empty() {
        warn!("Corpus is empty; every question will return no evidence");
    }

    let embedder = HttpEmbeddingClient::new(&config.embedding);
    info!("Embedding model: {}", embedder.model());

    Ok(QueryEngine::new(corpus, embedder, config))
}

fn policy_with_overrides(
    engine: &QueryEngine<HttpEmbeddingClient>,
    top_k: Option<usize>,
    min_score: Option<f32>,
) -> RankingPolicy {
    let mut policy = engine.policy();
    if let Some(top_k) = top_k {
        policy.top_k = top_k;
    }
    if let Some(min_score) = min_score {
        policy.min_score = min_score;
    }
    policy
}

async fn cmd_ask(
    config: &Config,
    question: &str,
    top_k: Option<usize>,
    min_score: Option<f32>,
    export: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    Validator::validate_query(question)?;

    let engine = build_engine(config).await?;
    let policy = policy_with_overrides(&engine, top_k, min_score);

    let outcome = engine
        .ask_with(question, policy)
        .await
        .context("Query failed")?;

    print_outcome(&outcome);

    if let Some(dir) = export {
        let exporter = JsonExporter::new(dir)?;
        let path = exporter.export_outcome(&outcome, pretty)?;
        println!("{}", format_success(&format!("Saved to {}", path.display())));
    }

    Ok(())
}

async fn cmd_repl(config: &Config, top_k: Option<usize>, min_score: Option<f32>) -> Result<()> {
    let engine = build_engine(config).await?;
    let policy = policy_with_overrides(&engine, top_k, min_score);

    println!(
        "\n{}\n",
        format_info("Query engine ready. Type 'exit' to quit.")
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Ask a question: ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let question = line.trim();

        if matches!(question.to_lowercase().as_str(), "exit" | "quit") {
            println!("{}", format_info("Session ended."));
            break;
        }
        if question.is_empty() {
            continue;
        }
        if let Err(e) = Validator::validate_query(question) {
            eprintln!("{}", format_warning(&e.to_string()));
            continue;
        }

        match engine.ask_with(question, policy).await {
            Ok(outcome) => print_outcome(&outcome),
            Err(e) => eprintln!("{}", format_error(&format!("Query failed: {}", e))),
        }
    }

    Ok(())
}

fn print_outcome(outcome: &QueryOutcome) {
    if outcome.evidence.is_empty() {
        println!("\n{}\n", format_info("No strong evidence found."));
        return;
    }

    println!("\n{}\n", format_heading("FINAL ANSWER"));
    println!("{}", outcome.answer);

    println!("\n{}\n", format_heading("SUPPORTING EVIDENCE"));
    for (idx, item) in outcome.evidence.iter().enumerate() {
        println!("{}", item.format_summary(idx + 1, EVIDENCE_PREVIEW_CHARS));
    }
}

async fn cmd_stats(config: &Config) -> Result<()> {
    info!("Gathering corpus statistics");

    let engine = build_engine(config).await?;
    let corpus = engine.corpus();

    let mut per_domain: BTreeMap<String, usize> = BTreeMap::new();
    let sources = corpus.sources();
    for source in &sources {
        *per_domain
            .entry(engine.classify_source(source).to_string())
            .or_insert(0) += 1;
    }

    println!("Sections:         {}", corpus.len());
    println!("Distinct sources: {}", sources.len());
    println!(
        "Vector dimension: {}",
        corpus
            .dimension()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "n/a".to_string())
    );
    println!("Sources by domain:");
    for (domain, count) in per_domain {
        println!("  {:<8} {}", domain, count);
    }

    Ok(())
}

fn cmd_summarize(input: &Path, output: PathBuf, sentences: usize) -> Result<()> {
    info!("Starting summarization of {}", input.display());

    let pipeline = SummaryPipeline::new(FrequencySummarizer::new(sentences.max(1)), output);
    let stats = pipeline.run(input).context("Summarization failed")?;

    println!(
        "{}",
        format_success(&format!(
            "{} summarized, {} empty, {} failed",
            stats.files_processed, stats.files_skipped, stats.files_failed
        ))
    );

    Ok(())
}
