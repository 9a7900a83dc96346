/*!
 * Translation service for document translation using AI providers.
 *
 * This module contains the core functionality for translating a segmented
 * document using various AI providers. It is split into several submodules:
 *
 * - `core`: Core translation functionality and service definition
 * - `pipeline`: Sequential chunk pipeline with context carryover
 * - `prompts`: Prompt templates for translation requests
 */

// Re-export main types for easier usage
pub use self::core::TranslationService;
pub use self::pipeline::{
    ChunkTranslator, ContextWindow, TranslatedFragment, TranslationPipeline,
};
pub use self::prompts::PromptTemplate;

// Submodules
pub mod core;
pub mod pipeline;
pub mod prompts;
