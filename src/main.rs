//! Command-line entry point: extract a news article and print either its
//! full text or a length-controlled extractive summary.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use newsgist::collab::{LanguageDetector, ScriptRangeDetector};
use newsgist::pipeline::{NoopObserver, SummaryPipeline};
use newsgist::types::SummaryLength;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LengthArg {
    Low,
    Medium,
    High,
}

impl From<LengthArg> for SummaryLength {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Low => SummaryLength::Low,
            LengthArg::Medium => SummaryLength::Medium,
            LengthArg::High => SummaryLength::High,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "newsgist", about = "Summarize a news article from its URL")]
struct Args {
    /// Article URL to extract.
    url: String,

    /// Summary length preset.
    #[arg(long, value_enum, default_value = "medium")]
    length: LengthArg,

    /// Print the full extracted article instead of a summary.
    #[arg(long)]
    full_text: bool,

    /// Report the detected body-text language.
    #[arg(long)]
    detect_language: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let pipeline = SummaryPipeline::new();

    let output = pipeline.summarize_url(&args.url, args.length.into(), &mut NoopObserver);

    if args.detect_language {
        match ScriptRangeDetector::new().detect(&output.article.body_text) {
            Some(code) => println!("Detected language: {code}"),
            None => println!("Detected language: unknown"),
        }
    }

    println!("{}", output.article.title);
    println!();
    if args.full_text {
        println!("{}", output.article.body_text);
    } else {
        println!("{}", output.summary);
    }
}
