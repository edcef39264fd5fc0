//! Data model for the comment-block scan — independent of the file system.

/// Classification of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `// @Summary <text>`
    Summary(SummaryLine<'a>),
    /// `// @Description ...`
    Description,
    /// Any other `//` line.
    Comment,
    /// Anything that is not a `//` comment; ends a block.
    Code,
}

impl LineKind<'_> {
    pub fn is_comment(&self) -> bool {
        !matches!(self, LineKind::Code)
    }
}

/// Pieces of a summary declaration needed to build its description line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine<'a> {
    /// Whitespace before `//`
    pub indent: &'a str,
    /// Whitespace between `//` and `@Summary`
    pub gap: &'a str,
    /// Free text after `@Summary`, untrimmed
    pub text: &'a str,
}

/// A summary line plus the comment lines that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock<'a> {
    /// Index of the summary line
    pub start: usize,
    /// Index of the first line past the block
    pub end: usize,
    pub summary: SummaryLine<'a>,
    pub has_description: bool,
}

/// A line to insert before original line `at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub at: usize,
    pub line: String,
}

/// Counts accumulated over a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files_changed: usize,
    pub inserted: usize,
}

impl RunSummary {
    pub fn record(&mut self, inserted: usize) {
        if inserted > 0 {
            self.files_changed += 1;
            self.inserted += inserted;
        }
    }
}
