use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::document_processor::DocumentText;
use crate::file_utils::FileManager;
use crate::translation::{TranslationPipeline, TranslationService};

// @module: Application controller for document translation

/// Main application controller for document translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self {
            config,
        };

        Ok(controller)
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Run the main workflow: read, segment, translate, assemble, write.
    ///
    /// Returns the path of the written translated document. Per-chunk
    /// translation failures leave gaps in the output but never abort the
    /// run; only file I/O and configuration problems do.
    pub async fn run(&self, input_file: PathBuf, title: Option<String>) -> Result<PathBuf> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        let document = DocumentText::from_file(&input_file)?;
        info!(
            "Processing {} ({} chars, {} -> {})",
            input_file.display(),
            document.char_count(),
            self.config.source_language,
            self.config.target_language
        );

        let chunks = document.split_into_chunks(self.config.pipeline.max_chunk_size);
        if chunks.is_empty() {
            warn!("No translatable content found in input file");
        }

        // Audit output: the raw chunks as submitted, before augmentation
        DocumentText::save_chunks(&chunks, &self.config.pipeline.chunks_dir)?;
        info!(
            "Saved {} chunks to {}",
            chunks.len(),
            self.config.pipeline.chunks_dir
        );

        let service = TranslationService::new(
            self.config.translation.clone(),
            &self.config.source_language,
            &self.config.target_language,
        )?;

        // A dead provider still produces a complete (gap-filled) output, so
        // a failed probe is worth a warning, not an abort
        if let Err(e) = service.test_connection().await {
            warn!(
                "Connection test to {} failed: {}",
                self.config.translation.provider.display_name(),
                e
            );
        }

        let progress_bar = ProgressBar::new(chunks.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Translating");

        let pipeline = TranslationPipeline::new(self.config.pipeline.context_window_size);
        let fragments = pipeline
            .run(&chunks, &service, |done, _total| {
                progress_bar.set_position(done as u64);
            })
            .await;

        progress_bar.finish_and_clear();

        let failed: Vec<usize> = chunks
            .iter()
            .zip(fragments.iter())
            .filter(|(_, fragment)| fragment.is_failed())
            .map(|(chunk, _)| chunk.seq_num)
            .collect();
        if !failed.is_empty() {
            warn!(
                "{} of {} chunks failed to translate (chunks: {:?}); output will contain gaps",
                failed.len(),
                chunks.len(),
                failed
            );
        }

        let translated = TranslationPipeline::assemble(&fragments);

        let title = title.unwrap_or_else(|| self.config.pipeline.output_title.clone());
        let output_path =
            FileManager::generate_output_path(&self.config.pipeline.output_dir, &title, "txt");
        FileManager::write_to_file(&output_path, &translated)?;

        info!(
            "Translated document written to {} in {:.1}s",
            output_path.display(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(output_path)
    }
}
