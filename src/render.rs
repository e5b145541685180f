//! Markdown output for summaries.
//!
//! Section layout of `<basename>_summary.md`:
//!
//! ```text
//! # <basename> Summary
//! ## Keyword Summary | ## Sentence Summary | (mixed: three sections)
//! ## Core Concepts          numbered, bold, at most 15
//! ## Summary Statistics     mixed only
//! ## Keyword Details        numbered, score to 3 decimals
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::keywords::Keyword;
use crate::summary::{Statistics, Summary, CORE_CONCEPTS};
use crate::Result;

/// Keywords listed in a simple summary.
pub const SIMPLE_KEYWORDS: usize = 10;

/// Render `summary` as a Markdown document titled after `basename`.
pub fn render_summary(basename: &str, summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {basename} Summary\n\n"));

    match summary {
        Summary::Keywords { content, .. } => {
            section(&mut out, "Keyword Summary", content);
        }
        Summary::Sentences { content, .. } => {
            section(&mut out, "Sentence Summary", content);
        }
        Summary::Mixed {
            sentence_summary,
            keyword_summary,
            topic_summary,
            ..
        } => {
            section(&mut out, "Key Content", sentence_summary);
            section(&mut out, "Keyword Summary", keyword_summary);
            section(&mut out, "Keywords by Topic", topic_summary);
        }
    }

    out.push_str("## Core Concepts\n\n");
    for (i, concept) in summary.core_concepts().iter().take(CORE_CONCEPTS).enumerate() {
        out.push_str(&format!("{}. **{concept}**\n", i + 1));
    }
    out.push('\n');

    if let Some(stats) = summary.statistics() {
        statistics(&mut out, stats);
    }

    out.push_str("## Keyword Details\n\n");
    for (i, keyword) in summary.keywords().iter().enumerate() {
        out.push_str(&format!(
            "{}. **{}** (score: {:.3})\n",
            i + 1,
            keyword.term,
            keyword.score
        ));
    }

    out
}

fn section(out: &mut String, title: &str, body: &str) {
    out.push_str(&format!("## {title}\n\n{body}\n\n"));
}

fn statistics(out: &mut String, stats: &Statistics) {
    out.push_str(&format!(
        "## Summary Statistics\n\n\
         - **Original sentences**: {}\n\
         - **Original words**: {}\n\
         - **Original characters**: {}\n\
         - **Summary sentences**: {}\n\
         - **Compression ratio**: {:.1}%\n\n",
        stats.sentence_count,
        stats.word_count,
        stats.char_count,
        stats.summary_sentence_count,
        stats.compression_ratio,
    ));
}

/// Render a short summary: body text plus the top keywords as bullets.
pub fn render_simple(basename: &str, summary_text: &str, keywords: &[Keyword]) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {basename} Brief Summary\n\n"));
    section(&mut out, "Summary", summary_text);
    out.push_str("## Top Keywords\n\n");
    for keyword in keywords.iter().take(SIMPLE_KEYWORDS) {
        out.push_str(&format!("- **{}** (score: {:.3})\n", keyword.term, keyword.score));
    }
    out
}

/// Writes summary documents into one output directory.
#[derive(Debug, Clone)]
pub struct MarkdownWriter {
    output_dir: PathBuf,
}

impl MarkdownWriter {
    /// Create a writer, creating `output_dir` if needed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the directory cannot be created.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// The output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The file stem of `path`, used to name its summary.
    pub fn basename(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "note".to_string())
    }

    /// Write `<basename>_summary.md` and return its path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be written.
    pub fn write_summary(&self, basename: &str, summary: &Summary) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("{basename}_summary.md"));
        fs::write(&path, render_summary(basename, summary))?;
        tracing::debug!(path = %path.display(), "summary written");
        Ok(path)
    }

    /// Write `<basename>_simple_summary.md` and return its path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be written.
    pub fn write_simple_summary(
        &self,
        basename: &str,
        summary_text: &str,
        keywords: &[Keyword],
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("{basename}_simple_summary.md"));
        fs::write(&path, render_simple(basename, summary_text, keywords))?;
        Ok(path)
    }
}
