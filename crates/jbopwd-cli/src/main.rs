mod dicts;

use std::path::PathBuf;

use clap::Parser;
use jbopwd_dict::DictError;
use jbopwd_generate::{
    GenerateError, GeneratedSentence, SentenceGenerator, SentenceOptions, SystemEntropy,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("dictionary error: {0}")]
    Dict(#[from] DictError),
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no data loaded: {0}")]
    EmptyLexicon(String),
}

#[derive(Parser, Debug)]
#[command(name = "jbopwd", version, about = "Lojban passphrase generator")]
struct Cli {
    /// Path to the gismu table.
    #[arg(long, value_name = "FILE")]
    gismu: Option<PathBuf>,
    /// Path to the cmavo table.
    #[arg(long, value_name = "FILE")]
    cmavo: Option<PathBuf>,
    /// Minimum number of words in each sentence.
    #[arg(long, default_value_t = 5)]
    min_size: usize,
    /// Terminate each sentence with a period.
    #[arg(long, default_value_t = false)]
    period: bool,
    /// Guarantee at least one apostrophe in each sentence.
    #[arg(long, default_value_t = false)]
    apostrophe: bool,
    /// Mix generated compound words (lujvo) into the sentences.
    #[arg(long, default_value_t = false)]
    lujvo: bool,
    /// Number of sentences to generate.
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Print the gloss list under each sentence.
    #[arg(long, default_value_t = false)]
    explain: bool,
    /// Emit the results as pretty JSON instead of plain text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let lexicon = dicts::load(cli.gismu.as_deref(), cli.cmavo.as_deref())?;
    if lexicon.is_empty() {
        return Err(CliError::EmptyLexicon(
            "check the gismu and cmavo table files".to_string(),
        ));
    }

    let options = SentenceOptions {
        min_size: cli.min_size,
        terminal_period: cli.period,
        force_apostrophe: cli.apostrophe,
        include_lujvo: cli.lujvo,
    };
    let generator = SentenceGenerator::new(&lexicon, options);
    let mut rng = SystemEntropy;

    let mut results: Vec<GeneratedSentence> = Vec::with_capacity(cli.count);
    for _ in 0..cli.count {
        results.push(generator.generate(&mut rng)?);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        println!("{}", result.sentence);
        if cli.explain {
            for gloss in &result.glosses {
                println!("  {gloss}");
            }
        }
    }
    Ok(())
}
