/*!
 * Prompt templates for translation requests.
 *
 * The template carries the full translation instruction sent alongside each
 * chunk. The start of a chunk may repeat the tail of the previous one (the
 * carried context), so the instruction insists on plain translated text with
 * no commentary the reassembly step would have to strip.
 */

/// Instruction template for document translation.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default instruction for document translation.
    pub const DOCUMENT_TRANSLATOR: &'static str =
        "Translate the following text from {source_language} to {target_language}. \
         Output only the translated text, no summaries, no bullet points.";

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default document translator template.
    pub fn document_translator() -> Self {
        Self::new(Self::DOCUMENT_TRANSLATOR)
    }

    /// Render the template with the given language names.
    pub fn render(&self, source_language: &str, target_language: &str) -> String {
        self.template
            .replace("{source_language}", source_language)
            .replace("{target_language}", target_language)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::document_translator()
    }
}
