/*!
 * Sequential translation pipeline with context carryover.
 *
 * Each API call is stateless, so the pipeline threads a small window of
 * trailing source text from one chunk into the next: the window is prepended
 * to the chunk before submission, giving the provider enough material to
 * resolve pronouns and tense across the chunk boundary. The window is always
 * taken from the previous *augmented source* text, never from the translated
 * output, which would mix languages in the prompt.
 */

use async_trait::async_trait;
use log::{debug, error};

use crate::document_processor::Chunk;
use crate::errors::TranslationError;

/// Separator appended after every translated fragment (two blank lines)
pub const FRAGMENT_SEPARATOR: &str = "\n\n\n";

/// Seam between the pipeline and the translation capability
///
/// The pipeline only needs text in, text out; the service implements this
/// over whichever provider is configured, and tests implement it in memory.
#[async_trait]
pub trait ChunkTranslator: Send + Sync {
    /// Translate one augmented chunk of text
    async fn translate_chunk(&self, text: &str) -> Result<String, TranslationError>;
}

/// Trailing slice of the previous augmented chunk, carried into the next one.
#[derive(Debug, Clone)]
pub struct ContextWindow {
    /// Maximum number of characters the window retains
    max_chars: usize,

    /// Current window contents, empty before the first chunk
    text: String,
}

impl ContextWindow {
    /// Create an empty window with the given capacity
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            text: String::new(),
        }
    }

    /// Whether the window currently holds any context
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Current window contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Prepend the window to a chunk, with no separator in between
    pub fn augment(&self, chunk_text: &str) -> String {
        format!("{}{}", self.text, chunk_text)
    }

    /// Replace the window with the last `max_chars` characters of the
    /// augmented text (the whole text if shorter)
    pub fn advance(&mut self, augmented: &str) {
        let chars: Vec<char> = augmented.chars().collect();
        let skip = chars.len().saturating_sub(self.max_chars);
        self.text = chars[skip..].iter().collect();
    }
}

/// Outcome of translating one chunk.
///
/// A failed provider call is recorded explicitly instead of being collapsed
/// into an empty string, so callers can tell "translated to empty" apart
/// from "call failed". Assembly renders failures as empty fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatedFragment {
    /// The provider's trimmed output for the chunk
    Translated(String),
    /// The call failed; carries the error description
    Failed(String),
}

impl TranslatedFragment {
    /// Text contributed to the assembled document (empty for failures)
    pub fn text(&self) -> &str {
        match self {
            Self::Translated(text) => text,
            Self::Failed(_) => "",
        }
    }

    /// Whether the provider call for this chunk failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Drives chunks through a translator one at a time, carrying context.
#[derive(Debug, Clone)]
pub struct TranslationPipeline {
    /// Number of trailing characters carried between chunks
    context_size: usize,
}

impl TranslationPipeline {
    /// Create a pipeline with the given context window size
    pub fn new(context_size: usize) -> Self {
        Self { context_size }
    }

    /// Translate all chunks in order, returning one fragment per chunk.
    ///
    /// Strictly sequential: chunk i+1 is not submitted before chunk i's
    /// call returns, because its context is only known then. A failed call
    /// yields a `Failed` fragment and the run continues; it is never
    /// retried and never aborts the run.
    pub async fn run<T>(
        &self,
        chunks: &[Chunk],
        translator: &T,
        progress_callback: impl Fn(usize, usize),
    ) -> Vec<TranslatedFragment>
    where
        T: ChunkTranslator,
    {
        let total = chunks.len();
        let mut context = ContextWindow::new(self.context_size);
        let mut fragments = Vec::with_capacity(total);

        for (index, chunk) in chunks.iter().enumerate() {
            let augmented = context.augment(&chunk.text);
            debug!(
                "Translating chunk {}/{} ({} chars, {} of context)",
                chunk.seq_num,
                total,
                augmented.chars().count(),
                context.text().chars().count()
            );

            let fragment = match translator.translate_chunk(&augmented).await {
                Ok(text) => TranslatedFragment::Translated(text.trim().to_string()),
                Err(e) => {
                    error!("Failed to translate chunk {}: {}", chunk.seq_num, e);
                    TranslatedFragment::Failed(e.to_string())
                }
            };
            fragments.push(fragment);

            // The next window comes from the augmented source text, not the
            // translation result
            context.advance(&augmented);
            progress_callback(index + 1, total);
        }

        fragments
    }

    /// Concatenate fragments into the final document, each followed by the
    /// fragment separator. N chunks always yield N separators, so gaps from
    /// failed chunks keep their place in the output.
    pub fn assemble(fragments: &[TranslatedFragment]) -> String {
        let mut result = String::new();
        for fragment in fragments {
            result.push_str(fragment.text());
            result.push_str(FRAGMENT_SEPARATOR);
        }
        result
    }
}
