use std::fmt;
use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow};
use log::{debug, info, warn};

use crate::file_utils::FileManager;

// @module: Document reading and segmentation

// @const: Characters a chunk boundary may land on
const CUT_DELIMITERS: [char; 6] = [' ', '.', ',', '\n', '!', '?'];

// @struct: Single document chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    // @field: 1-based sequence number
    pub seq_num: usize,

    // @field: Trimmed chunk text
    pub text: String,
}

impl Chunk {
    /// Creates a new chunk - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(seq_num: usize, text: String) -> Self {
        Chunk { seq_num, text }
    }

    /// Character count of the chunk text
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// File name used when the chunk is saved for auditing
    pub fn file_name(&self) -> String {
        format!("chunk_{}.txt", self.seq_num)
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Compute the ordered char-index spans `[start, end)` that partition a text
/// into blocks of at most `max_chars` characters without cutting words.
///
/// A proposed cut point is walked backward to the nearest delimiter
/// (whitespace or sentence punctuation). When a single token is longer than
/// `max_chars` the walk would reach the span start; the cut then falls back
/// to exactly `max_chars` characters and may split the token.
///
/// The spans are disjoint and cover the text exactly, including whitespace
/// runs that later trim to nothing.
pub fn chunk_spans(text: &str, max_chars: usize) -> Vec<(usize, usize)> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let max_chars = max_chars.max(1);

    let mut spans = Vec::new();
    let mut start = 0;

    while start < len {
        let proposed = (start + max_chars).min(len);
        let mut end = proposed;

        // Only genuine cut points are adjusted; reaching end-of-text is not
        if end < len {
            while end > start && !CUT_DELIMITERS.contains(&chars[end]) {
                end -= 1;
            }

            if end == start {
                // Token longer than max_chars: accept a mid-word cut
                end = proposed;
            }
        }

        spans.push((start, end));
        start = end;
    }

    spans
}

/// A full input document held in memory
#[derive(Debug)]
pub struct DocumentText {
    /// Source filename
    pub source_file: PathBuf,

    /// Complete document text
    pub text: String,
}

impl DocumentText {
    /// Create a document from already-loaded text
    pub fn new(source_file: PathBuf, text: String) -> Self {
        DocumentText { source_file, text }
    }

    /// Read a UTF-8 text file fully into memory
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading text file: {}", path.display());

        if !FileManager::file_exists(path) {
            return Err(anyhow!("Input file does not exist: {:?}", path));
        }

        let text = FileManager::read_to_string(path)?;
        Ok(DocumentText {
            source_file: path.to_path_buf(),
            text,
        })
    }

    /// Total character count of the document
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Split the document into chunks of at most `max_chars` characters
    ///
    /// Chunk boundaries respect word boundaries (see `chunk_spans`). Each
    /// span is trimmed of surrounding whitespace; whitespace-only spans are
    /// absorbed and produce no chunk. Surviving chunks are numbered from 1
    /// in document order.
    pub fn split_into_chunks(&self, max_chars: usize) -> Vec<Chunk> {
        if self.text.is_empty() {
            warn!("Document is empty, nothing to split");
            return Vec::new();
        }

        info!("Splitting text into blocks of up to {} characters", max_chars);

        let chars: Vec<char> = self.text.chars().collect();
        let mut chunks = Vec::new();

        for (start, end) in chunk_spans(&self.text, max_chars) {
            let block: String = chars[start..end].iter().collect();
            let trimmed = block.trim();

            if !trimmed.is_empty() {
                chunks.push(Chunk {
                    seq_num: chunks.len() + 1,
                    text: trimmed.to_string(),
                });
                debug!(
                    "Cut at {}..{} chars, block length {}",
                    start,
                    end,
                    trimmed.chars().count()
                );
            }
        }

        info!("Document split into {} chunks", chunks.len());
        chunks
    }

    /// Save each chunk to `<output_dir>/chunk_<seq>.txt` for auditing
    pub fn save_chunks<P: AsRef<Path>>(chunks: &[Chunk], output_dir: P) -> Result<()> {
        let output_dir = output_dir.as_ref();
        FileManager::ensure_dir(output_dir)?;

        for chunk in chunks {
            let chunk_path = output_dir.join(chunk.file_name());
            FileManager::write_to_file(&chunk_path, &chunk.text)?;
            debug!("Chunk {} saved to: {}", chunk.seq_num, chunk_path.display());
        }

        Ok(())
    }
}
