/*!
 * Common test utilities for the doctrans test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use doctrans::app_config::{Config, ProviderConfig, TranslationCommonConfig, TranslationConfig, TranslationProvider};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Sample document text used across segmentation tests
pub fn sample_document_text() -> &'static str {
    "Hello world. This is a test sentence that continues."
}

/// Creates a configuration suitable for tests: Ollama provider (no API
/// key required), small chunk and context sizes
pub fn create_test_config() -> Config {
    let mut config = Config {
        source_language: "en".to_string(),
        target_language: "pt".to_string(),
        ..Config::default()
    };

    config.pipeline.max_chunk_size = 20;
    config.pipeline.context_window_size = 5;

    config.translation = TranslationConfig {
        provider: TranslationProvider::Ollama,
        available_providers: vec![
            ProviderConfig {
                provider_type: "ollama".to_string(),
                model: "llama3.2:3b".to_string(),
                api_key: String::new(),
                endpoint: "http://localhost:11434".to_string(),
                timeout_secs: 30,
            },
            ProviderConfig {
                provider_type: "gemini".to_string(),
                model: "gemini-1.5-flash".to_string(),
                api_key: "test-api-key".to_string(),
                endpoint: String::new(),
                timeout_secs: 30,
            },
        ],
        common: TranslationCommonConfig::default(),
    };

    config
}
