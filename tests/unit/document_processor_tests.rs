/*!
 * Tests for document segmentation
 */

use std::path::PathBuf;
use anyhow::Result;
use doctrans::document_processor::{chunk_spans, Chunk, DocumentText};
use crate::common;

const DELIMITERS: [char; 6] = [' ', '.', ',', '\n', '!', '?'];

fn doc_from(text: &str) -> DocumentText {
    DocumentText::new(PathBuf::from("test.txt"), text.to_string())
}

/// Reassemble a text from its spans, including absorbed whitespace
fn reassemble(text: &str, spans: &[(usize, usize)]) -> String {
    let chars: Vec<char> = text.chars().collect();
    spans
        .iter()
        .flat_map(|&(start, end)| chars[start..end].iter())
        .collect()
}

/// Test that spans cover the document exactly
#[test]
fn test_chunkSpans_coverage_shouldReconstructOriginalText() {
    let texts = [
        "Hello world. This is a test sentence that continues.",
        "one two three four five six seven eight nine ten",
        "  leading and trailing whitespace  ",
        "word",
        "a\nb\nc\nd\ne\nf\ng\nh",
        "Ünïcödé tèxt with àccénts. Sécond sentence hère!",
    ];

    for text in texts {
        let spans = chunk_spans(text, 10);
        assert_eq!(reassemble(text, &spans), text, "coverage failed for {:?}", text);
    }
}

/// Test that spans are contiguous and ordered
#[test]
fn test_chunkSpans_shouldBeContiguousAndOrdered() {
    let text = "The quick brown fox jumps over the lazy dog near the river bank.";
    let spans = chunk_spans(text, 12);

    assert_eq!(spans[0].0, 0);
    for window in spans.windows(2) {
        assert_eq!(window[0].1, window[1].0);
        assert!(window[0].0 < window[0].1);
    }
    assert_eq!(spans.last().unwrap().1, text.chars().count());
}

/// Test that no boundary falls inside a word when every word fits
#[test]
fn test_chunkSpans_withShortWords_shouldNotSplitWords() {
    let text = "The quick brown fox jumps over the lazy dog near the river bank.";
    let chars: Vec<char> = text.chars().collect();
    let spans = chunk_spans(text, 15);

    for &(_, end) in &spans[..spans.len() - 1] {
        // Every internal boundary lands on a delimiter character
        assert!(
            DELIMITERS.contains(&chars[end]),
            "boundary at {} lands inside a word (char {:?})",
            end,
            chars[end]
        );
    }
}

/// Test that a token longer than max_chars is cut at exactly max_chars
#[test]
fn test_chunkSpans_withOverlongToken_shouldCutAtExactlyMaxChars() {
    let text = "abcdefghijklmnopqrstuvwxyz";
    let spans = chunk_spans(text, 10);

    assert_eq!(spans, vec![(0, 10), (10, 20), (20, 26)]);

    let doc = doc_from(text);
    let chunks = doc.split_into_chunks(10);
    assert_eq!(chunks[0].text, "abcdefghij");
    assert_eq!(chunks[0].char_count(), 10);
}

/// Test that the final boundary is never walked back
#[test]
fn test_chunkSpans_atEndOfText_shouldNotWalkBack() {
    // 9 chars, no trailing delimiter; a limit of 10 must keep one span
    let text = "lastwords";
    let spans = chunk_spans(text, 10);

    assert_eq!(spans, vec![(0, 9)]);
}

/// Test that emitted chunks are never empty or whitespace-only
#[test]
fn test_splitIntoChunks_shouldNeverEmitEmptyChunks() {
    let texts = [
        "word     another     third",
        "   \n\n   spaced    out   ",
        "a. b. c. d. e. f. g. h.",
    ];

    for text in texts {
        let doc = doc_from(text);
        for chunk in doc.split_into_chunks(8) {
            assert!(!chunk.text.trim().is_empty());
            assert_eq!(chunk.text, chunk.text.trim());
        }
    }
}

/// Test that whitespace-only input produces no chunks
#[test]
fn test_splitIntoChunks_withWhitespaceOnlyInput_shouldProduceNothing() {
    let doc = doc_from("   \n\n\t  \n   ");
    assert!(doc.split_into_chunks(5).is_empty());
}

/// Test that an empty document produces no chunks
#[test]
fn test_splitIntoChunks_withEmptyInput_shouldProduceNothing() {
    let doc = doc_from("");
    assert!(doc.split_into_chunks(100).is_empty());
}

/// Test that chunks are numbered from 1 in document order
#[test]
fn test_splitIntoChunks_shouldNumberChunksFromOne() {
    let doc = doc_from("one two three four five six seven eight nine ten");
    let chunks = doc.split_into_chunks(10);

    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.seq_num, i + 1);
    }
}

/// Test the documented example end to end
#[test]
fn test_splitIntoChunks_withExampleSentence_shouldRespectWordBoundaries() {
    let doc = doc_from(common::sample_document_text());
    let chunks = doc.split_into_chunks(20);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].text, "Hello world. This is");
    assert_eq!(chunks[1].text, "a test sentence");
    assert_eq!(chunks[2].text, "that continues.");

    // No chunk exceeds the limit and none is empty
    for chunk in &chunks {
        assert!(chunk.char_count() <= 20);
        assert!(!chunk.text.is_empty());
    }
}

/// Test that multi-byte characters are counted as single characters
#[test]
fn test_splitIntoChunks_withMultibyteText_shouldCountChars() {
    let text = "ééééé ééééé ééééé";
    let doc = doc_from(text);
    let chunks = doc.split_into_chunks(11);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, "ééééé ééééé");
    assert_eq!(chunks[1].text, "ééééé");
}

/// Test reading a document from disk
#[test]
fn test_documentText_fromFile_shouldReadContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "input.txt",
        "Some document content.",
    )?;

    let doc = DocumentText::from_file(&file)?;
    assert_eq!(doc.text, "Some document content.");
    assert_eq!(doc.source_file, file);

    Ok(())
}

/// Test that reading a missing file fails
#[test]
fn test_documentText_fromFile_withMissingFile_shouldFail() {
    assert!(DocumentText::from_file("does_not_exist.txt").is_err());
}

/// Test that chunks are saved one file per sequence number
#[test]
fn test_saveChunks_shouldWriteOneFilePerChunk() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let chunks_dir = temp_dir.path().join("chunks");

    let chunks = vec![
        Chunk::new(1, "first".to_string()),
        Chunk::new(2, "second".to_string()),
        Chunk::new(3, "third".to_string()),
    ];

    DocumentText::save_chunks(&chunks, &chunks_dir)?;

    assert_eq!(std::fs::read_to_string(chunks_dir.join("chunk_1.txt"))?, "first");
    assert_eq!(std::fs::read_to_string(chunks_dir.join("chunk_2.txt"))?, "second");
    assert_eq!(std::fs::read_to_string(chunks_dir.join("chunk_3.txt"))?, "third");

    Ok(())
}
