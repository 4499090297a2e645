use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordsieve_core::config::{Config, Settings};
use wordsieve_core::error::Error;
use wordsieve_pipeline::{
    claim_marker, run_normalize, run_vocabulary_extract, write_marker, Completion, VocabularyReport,
};

#[derive(Parser, Debug)]
#[command(name = "wordsieve", about = "Lemmatize, filter and chunk the vocabulary of text files")]
struct Cli {
    /// Directory holding wordsieve.toml (defaults to the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print the stage report as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Stage 1: lemmatize inputs, strip block-listed words, then leave the completion marker.
    Normalize(PathArgs),
    /// Stage 2: claim the completion marker and write chunked vocabulary lists.
    Vocab(PathArgs),
    /// Both stages in one process, without a marker.
    Run(PathArgs),
}

#[derive(Args, Debug, Default)]
struct PathArgs {
    #[arg(long)]
    input_dir: Option<PathBuf>,
    #[arg(long)]
    blocklist_dir: Option<PathBuf>,
    #[arg(long)]
    filtered_dir: Option<PathBuf>,
    #[arg(long)]
    output_dir: Option<PathBuf>,
    #[arg(long)]
    marker_file: Option<PathBuf>,
}

impl PathArgs {
    fn apply(self, settings: &mut Settings) {
        let p = &mut settings.paths;
        if let Some(dir) = self.input_dir { p.input_dir = dir; }
        if let Some(dir) = self.blocklist_dir { p.blocklist_dir = dir; }
        if let Some(dir) = self.filtered_dir { p.filtered_dir = dir; }
        if let Some(dir) = self.output_dir { p.output_dir = dir; }
        if let Some(file) = self.marker_file { p.marker_file = file; }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(dir) => Config::load_from(dir),
        None => Config::load(),
    }
    .map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let mut settings = config.settings()?;

    match cli.command {
        Commands::Normalize(paths) => {
            paths.apply(&mut settings);
            let completion = normalize(&settings)?;
            write_marker(&settings.paths.marker_file)?;
            info!(marker = %settings.paths.marker_file.display(), "completion marker written");
            if cli.json { println!("{}", serde_json::to_string_pretty(&completion)?); } else { print_completion(&completion); }
        }
        Commands::Vocab(paths) => {
            paths.apply(&mut settings);
            let Some(completion) = claim_marker(&settings.paths.marker_file, &settings.paths.filtered_dir)? else {
                eprintln!("{}", Error::NotReady(settings.paths.marker_file.clone()));
                std::process::exit(1);
            };
            let report = run_vocabulary_extract(&completion, &settings.paths.output_dir, &settings.vocabulary)?;
            if cli.json { println!("{}", serde_json::to_string_pretty(&report)?); } else { print_report(&report); }
        }
        Commands::Run(paths) => {
            paths.apply(&mut settings);
            let completion = normalize(&settings)?;
            let report = run_vocabulary_extract(&completion, &settings.paths.output_dir, &settings.vocabulary)?;
            if cli.json {
                let both = serde_json::json!({ "normalize": completion, "vocabulary": report });
                println!("{}", serde_json::to_string_pretty(&both)?);
            } else {
                print_completion(&completion);
                print_report(&report);
            }
        }
    }
    Ok(())
}

fn normalize(settings: &Settings) -> anyhow::Result<Completion> {
    let p = &settings.paths;
    run_normalize(&p.input_dir, &p.blocklist_dir, &p.filtered_dir, &settings.normalize)
}

fn print_completion(completion: &Completion) {
    println!("Removal set: {} words", completion.removal_set_size);
    println!(
        "Normalized {} files into {}: {} written, {} skipped (empty), {} failed",
        completion.outcomes.len(),
        completion.filtered_dir.display(),
        completion.written(),
        completion.skipped(),
        completion.failed()
    );
}

fn print_report(report: &VocabularyReport) {
    for file in &report.files {
        println!(
            "{}: {} words, {} unique, {} chunk files",
            file.name, file.raw_count, file.unique_count, file.chunk_files
        );
        if let Some(error) = &file.error {
            println!("  failed: {error}");
        }
    }
    println!(
        "Total: {} words, {} unique, {} chunk files in {}",
        report.total_raw(),
        report.total_unique(),
        report.total_chunk_files(),
        report.output_dir.display()
    );
}
