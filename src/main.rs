//! notesum: summarize a folder of lecture notes into Markdown.
//!
//! Everything runs locally. Flags override `notesum.toml`, which overrides
//! the built-in defaults.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use notesum::{batch, Config, Language, SummaryKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "notesum")]
#[command(about = "Summarize lecture notes into Markdown: keywords, key sentences, topics")]
#[command(version)]
struct Cli {
    /// Directory holding the notes
    #[arg(short, long, value_name = "DIR")]
    notes: Option<PathBuf>,

    /// Directory summaries are written to
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Summary type: keywords, sentences or mixed
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    summary_type: Option<SummaryKind>,

    /// Comma-separated file extensions, e.g. ".txt,.md"
    #[arg(short, long, value_delimiter = ',', value_name = "EXT")]
    ext: Option<Vec<String>>,

    /// Note language: ko or en
    #[arg(short, long, value_name = "LANG")]
    lang: Option<Language>,

    /// Reproducibility seed
    #[arg(long)]
    seed: Option<u64>,

    /// Keywords kept per note
    #[arg(long)]
    max_keywords: Option<usize>,

    /// Notes longer than this many characters are chunked
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Minimum chunk size before a chunk may be closed
    #[arg(long)]
    min_chunk_size: Option<usize>,

    /// Sentences per sentence summary
    #[arg(long)]
    summary_sentences: Option<usize>,

    /// Also write a brief `<note>_simple_summary.md` per note
    #[arg(long)]
    simple: bool,

    /// Config file (default: ./notesum.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(notes) = self.notes {
            config.notes_dir = notes;
        }
        if let Some(out) = self.out {
            config.output_dir = out;
        }
        if let Some(kind) = self.summary_type {
            config.summary_kind = kind;
        }
        if let Some(ext) = self.ext {
            config.extensions = ext;
        }
        if let Some(lang) = self.lang {
            config.language = lang;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(n) = self.max_keywords {
            config.max_keywords = n;
        }
        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }
        if let Some(size) = self.min_chunk_size {
            config.min_chunk_size = Some(size);
        }
        if let Some(n) = self.summary_sentences {
            config.summary_sentences = n;
        }
        config.simple_summary |= self.simple;
        config.verbose |= self.verbose;
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Layer the flags over the loaded config, then validate once.
fn resolve_config(cli: Cli) -> anyhow::Result<Config> {
    let mut config =
        Config::load_unvalidated(cli.config.as_deref()).context("loading configuration")?;
    cli.apply(&mut config);
    config.validate().context("invalid options")?;
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = resolve_config(cli)?;

    init_logging(config.verbose);
    tracing::info!(
        notes = %config.notes_dir.display(),
        output = %config.output_dir.display(),
        kind = %config.summary_kind,
        language = %config.language,
        seed = config.seed,
        "starting"
    );

    let report = batch::run(&config)
        .with_context(|| format!("summarizing notes in {}", config.notes_dir.display()))?;
    Ok(report.succeeded > 0)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("error: no note could be summarized");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, body: &str) -> String {
        let path = dir.path().join("notesum.toml");
        std::fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_flag_overrides_invalid_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "chunk_size = 0\n");

        let cli = Cli::try_parse_from(["notesum", "--config", &path, "--chunk-size", "500"]).unwrap();
        let config = resolve_config(cli).unwrap();
        assert_eq!(config.chunk_size, 500);
    }

    #[test]
    fn test_invalid_file_value_without_flag_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "chunk_size = 0\n");

        let cli = Cli::try_parse_from(["notesum", "--config", &path]).unwrap();
        assert!(resolve_config(cli).is_err());
    }

    #[test]
    fn test_extension_list_flag() {
        let cli = Cli::try_parse_from([
            "notesum", "--ext", ".md,.txt", "--type", "keywords", "--simple",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.extensions, [".md", ".txt"]);
        assert_eq!(config.summary_kind, SummaryKind::Keywords);
        assert!(config.simple_summary);
    }
}
