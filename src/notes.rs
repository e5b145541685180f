//! Finding, reading and cleaning note files.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::{Error, Result};

/// Default extensions scanned for notes.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".txt", ".md"];

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

/// Recursively list files under `dir` whose extension is in `extensions`.
///
/// Extensions match case-insensitively, with or without the leading dot.
/// The result is sorted. A missing directory yields an empty list.
pub fn scan(dir: &Path, extensions: &[impl AsRef<str>]) -> Vec<PathBuf> {
    let wanted: Vec<String> = extensions
        .iter()
        .map(|e| normalize_extension(e.as_ref()))
        .filter(|e| !e.is_empty())
        .collect();

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| wanted.contains(&ext.to_lowercase()))
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    files.dedup();
    files
}

/// Decode raw bytes, trying UTF-8, then EUC-KR (CP949), then Latin-1.
///
/// Latin-1 maps every byte, so decoding itself never fails.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }
    if let Some(text) = encoding_rs::EUC_KR.decode_without_bom_handling_and_without_replacement(bytes)
    {
        tracing::debug!("decoded as EUC-KR");
        return text;
    }
    tracing::debug!("decoded as Latin-1");
    Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
}

/// Read a note file into text.
///
/// # Errors
///
/// Returns [`Error::UnreadableFile`] when the file cannot be read.
pub fn read(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(&bytes).into_owned())
}

struct Markdown {
    heading: Regex,
    emphasis: Regex,
    code: Regex,
    link: Regex,
    spaces: Regex,
    blank_lines: Regex,
}

static MARKDOWN: OnceLock<Markdown> = OnceLock::new();

fn markdown() -> &'static Markdown {
    MARKDOWN.get_or_init(|| Markdown {
        heading: Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]*").expect("heading regex"),
        emphasis: Regex::new(r"\*{1,2}([^*\n]+)\*{1,2}").expect("emphasis regex"),
        code: Regex::new(r"`([^`\n]+)`").expect("inline code regex"),
        link: Regex::new(r"\[([^\]\n]+)\]\([^)\n]+\)").expect("link regex"),
        spaces: Regex::new(r"[^\S\n]+").expect("spaces regex"),
        blank_lines: Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)*").expect("blank line regex"),
    })
}

/// Strip common Markdown syntax and normalize whitespace.
///
/// Headings, emphasis, inline code and links are reduced to their text.
/// Runs of spaces and tabs become one space; runs of blank lines become a
/// single blank line, so paragraph boundaries survive for chunking.
///
/// ```rust
/// use notesum::preprocess;
///
/// let text = "# Title\n\nSome **bold**   and `code`.\n\n\n\nSee [docs](http://x).";
/// assert_eq!(preprocess(text), "Title\n\nSome bold and code.\n\nSee docs.");
/// ```
pub fn preprocess(text: &str) -> String {
    let md = markdown();
    let text = text.replace("\r\n", "\n");
    let text = md.heading.replace_all(&text, "");
    let text = md.emphasis.replace_all(&text, "$1");
    let text = md.code.replace_all(&text, "$1");
    let text = md.link.replace_all(&text, "$1");
    let text = md.spaces.replace_all(&text, " ");
    let text = md.blank_lines.replace_all(&text, "\n\n");

    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Basic size figures for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Characters.
    pub char_count: usize,
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Non-empty sentences.
    pub sentence_count: usize,
    /// Non-empty blank-line separated paragraphs.
    pub paragraph_count: usize,
}

impl TextStats {
    /// Measure `text`.
    pub fn of(text: &str) -> Self {
        Self {
            char_count: text.chars().count(),
            word_count: text.split_whitespace().count(),
            sentence_count: crate::split_sentences(text).len(),
            paragraph_count: text.split("\n\n").filter(|p| !p.trim().is_empty()).count(),
        }
    }
}

/// Whether `text` is longer than `max_size` characters.
pub fn should_chunk(text: &str, max_size: usize) -> bool {
    text.chars().count() > max_size
}
