use std::fmt;

/// How a single candidate line was recognised during extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClassification {
    /// Starts with a known proxy scheme or http(s)
    PlainLink,
    /// Canonical Base64 that may wrap a list of links
    Base64Wrapped,
    /// Passes a validity pattern but is neither a link nor decodable link data
    Opaque,
}

/// A `.txt` file handed in by the user, already read into memory
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub size: u64,
    pub content: String,
}

/// Newline-joined lines that survived extraction. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent(String);

impl ExtractedContent {
    pub(crate) fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-blank lines, as counted in the report header
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n').filter(|line| !line.trim().is_empty())
    }
}

impl fmt::Display for ExtractedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extraction result together with the time it was recorded under
#[derive(Debug, Clone)]
pub struct ProcessedContent {
    pub content: ExtractedContent,
    pub processed_at: String,
}

/// Final annotated output, ready to be saved or printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub file_name: String,
    pub link_count: usize,
    pub body: String,
}

/// What a full `run` produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub source_name: String,
    pub source_size: u64,
    pub link_count: usize,
    pub processed_at: String,
    pub destination: String,
}
