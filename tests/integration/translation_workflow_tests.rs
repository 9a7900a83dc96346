/*!
 * End-to-end document translation tests using the mock provider
 */

use anyhow::Result;
use doctrans::app_controller::Controller;
use doctrans::document_processor::DocumentText;
use doctrans::file_utils::FileManager;
use doctrans::providers::mock::MockProvider;
use doctrans::translation::pipeline::{TranslationPipeline, FRAGMENT_SEPARATOR};
use crate::common;

/// Test the full flow: read, segment, save chunks, translate, assemble, write
#[tokio::test]
async fn test_workflow_withWorkingProvider_shouldProduceTranslatedDocument() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let work_dir = temp_dir.path().to_path_buf();

    let input_file = common::create_test_file(
        &work_dir,
        "input.txt",
        common::sample_document_text(),
    )?;

    // Read and segment
    let document = DocumentText::from_file(&input_file)?;
    let chunks = document.split_into_chunks(20);
    assert_eq!(chunks.len(), 3);

    // Audit chunks on disk, named by sequence number
    let chunks_dir = work_dir.join("chunks");
    DocumentText::save_chunks(&chunks, &chunks_dir)?;
    for chunk in &chunks {
        assert!(FileManager::file_exists(chunks_dir.join(chunk.file_name())));
    }

    // Translate sequentially with carried context
    let provider = MockProvider::working();
    let pipeline = TranslationPipeline::new(5);
    let fragments = pipeline.run(&chunks, &provider, |_, _| {}).await;
    assert_eq!(provider.request_count(), chunks.len());

    // Assemble and write the final document
    let translated = TranslationPipeline::assemble(&fragments);
    let output_path = FileManager::generate_output_path(
        work_dir.join("translated"),
        "translated_text",
        "txt",
    );
    FileManager::write_to_file(&output_path, &translated)?;

    let written = FileManager::read_to_string(&output_path)?;
    assert_eq!(written.matches(FRAGMENT_SEPARATOR).count(), chunks.len());
    assert!(written.contains("[TRANSLATED"));
    assert!(written.contains("Hello world. This is"));

    Ok(())
}

/// Test that provider failures leave gaps without losing fragments
#[tokio::test]
async fn test_workflow_withFailures_shouldKeepFragmentStructure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let work_dir = temp_dir.path().to_path_buf();

    let input_file = common::create_test_file(
        &work_dir,
        "input.txt",
        "First sentence here. Second sentence here. Third sentence here.",
    )?;

    let document = DocumentText::from_file(&input_file)?;
    let chunks = document.split_into_chunks(25);
    assert!(chunks.len() >= 2);

    // Every second call fails
    let provider = MockProvider::intermittent(2);
    let pipeline = TranslationPipeline::new(10);
    let fragments = pipeline.run(&chunks, &provider, |_, _| {}).await;

    assert_eq!(fragments.len(), chunks.len());
    assert!(fragments.iter().any(|f| f.is_failed()));

    let translated = TranslationPipeline::assemble(&fragments);
    assert_eq!(translated.matches(FRAGMENT_SEPARATOR).count(), chunks.len());

    Ok(())
}

/// Test controller construction and initialization checks
#[test]
fn test_controller_withConfig_shouldInitialize() -> Result<()> {
    let controller = Controller::with_config(common::create_test_config())?;
    assert!(controller.is_initialized());

    let default_controller = Controller::new_for_test()?;
    assert!(default_controller.is_initialized());

    Ok(())
}
