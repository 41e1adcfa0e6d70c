//! Format-agnostic data model for scan results.

use serde::Serialize;
use std::fmt;

/// Maximum number of `@param` / `@return` tags kept for one doc block.
pub const MAX_TAGS_PER_BLOCK: usize = 5;

/// Kind of tag collected from inside a doc block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Parameter,
    Returns,
}

impl TagKind {
    /// Label used by the text report, e.g. `Parameter`.
    pub fn label(self) -> &'static str {
        match self {
            TagKind::Parameter => "Parameter",
            TagKind::Returns => "Returns",
        }
    }
}

/// A single `@param` or `@return` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub kind: TagKind,
    /// Text following the tag, each word prefixed by a space (" x the value").
    pub text: String,
}

impl TagEntry {
    pub fn new(kind: TagKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Bounded, ordered tag accumulator for the doc block being scanned.
#[derive(Debug, Default)]
pub struct TagList {
    entries: Vec<TagEntry>,
}

impl TagList {
    /// Append a tag. Returns the entry back when the list is already full.
    pub fn push(&mut self, entry: TagEntry) -> Result<(), TagEntry> {
        if self.entries.len() >= MAX_TAGS_PER_BLOCK {
            return Err(entry);
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Move the collected tags out, leaving the list empty.
    pub fn take(&mut self) -> Vec<TagEntry> {
        std::mem::take(&mut self.entries)
    }
}

/// Class name paired with the file's `@author` text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassFact {
    pub name: String,
    pub author: String,
}

/// A documented method and the tags of the doc block above it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MethodFact {
    pub name: String,
    pub tags: Vec<TagEntry>,
}

/// Line counters for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub total_lines: usize,
    pub blank_lines: usize,
    pub doc_blocks: usize,
}

impl Counters {
    pub fn non_blank_lines(&self) -> usize {
        self.total_lines - self.blank_lines
    }
}

/// Recoverable content problems noticed while scanning.
///
/// None of these abort the scan; each is logged and kept for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// A tag arrived after [`MAX_TAGS_PER_BLOCK`] were already collected.
    TagOverflow { line: usize, dropped: TagEntry },
    /// A declaration line ended before its terminator token appeared.
    MalformedDeclaration { line: usize, terminator: String },
    /// Input ended while a doc block was still open.
    UnterminatedDocBlock { opened_at: usize },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::TagOverflow { line, dropped } => write!(
                f,
                "line {}: more than {} tags in one doc block, dropped {}:{}",
                line,
                MAX_TAGS_PER_BLOCK,
                dropped.kind.label(),
                dropped.text
            ),
            Anomaly::MalformedDeclaration { line, terminator } => {
                write!(f, "line {}: declaration has no '{}'", line, terminator)
            }
            Anomaly::UnterminatedDocBlock { opened_at } => {
                write!(f, "doc block opened on line {} is never closed", opened_at)
            }
        }
    }
}

/// Everything a scan produced, for reporters that render at the end.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub classes: Vec<ClassFact>,
    pub methods: Vec<MethodFact>,
    pub summary: Summary,
    pub anomalies: Vec<Anomaly>,
}

/// Final counters as shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_lines: usize,
    pub non_blank_lines: usize,
    pub doc_blocks: usize,
}

impl From<Counters> for Summary {
    fn from(c: Counters) -> Self {
        Self {
            total_lines: c.total_lines,
            non_blank_lines: c.non_blank_lines(),
            doc_blocks: c.doc_blocks,
        }
    }
}
