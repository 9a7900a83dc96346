/*!
 * Tests for language utility functions
 */

use doctrans::language_utils::{
    get_language_name, language_codes_match, normalize_code, validate_language_code,
};

/// Test validation of ISO 639-1 codes
#[test]
fn test_validate_language_code_withValidPart1Codes_shouldSucceed() {
    assert!(validate_language_code("en").is_ok());
    assert!(validate_language_code("pt").is_ok());
    assert!(validate_language_code("fr").is_ok());
}

/// Test validation of ISO 639-3 codes
#[test]
fn test_validate_language_code_withValidPart3Codes_shouldSucceed() {
    assert!(validate_language_code("eng").is_ok());
    assert!(validate_language_code("por").is_ok());
}

/// Test validation rejects unknown codes
#[test]
fn test_validate_language_code_withInvalidCodes_shouldFail() {
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("nope").is_err());
    assert!(validate_language_code("").is_err());
}

/// Test validation tolerates surrounding whitespace and case
#[test]
fn test_validate_language_code_withWhitespaceAndCase_shouldNormalize() {
    assert!(validate_language_code(" EN ").is_ok());
    assert!(validate_language_code("Por").is_ok());
}

/// Test normalization to 2-letter codes
#[test]
fn test_normalize_code_shouldPreferPart1() {
    assert_eq!(normalize_code("eng").unwrap(), "en");
    assert_eq!(normalize_code("por").unwrap(), "pt");
    assert_eq!(normalize_code("en").unwrap(), "en");
}

/// Test that matching treats 2- and 3-letter codes as equal
#[test]
fn test_language_codes_match_acrossCodeLengths_shouldMatch() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("pt", "por"));
    assert!(!language_codes_match("en", "pt"));
    assert!(!language_codes_match("en", "xx"));
}

/// Test English display names used in prompts
#[test]
fn test_get_language_name_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("pt").unwrap(), "Portuguese");
    assert!(get_language_name("zz").is_err());
}
