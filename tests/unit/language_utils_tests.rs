/*!
 * Tests for language utility functions
 */

use lexibridge::language_utils::{
    LanguageCodeType, contains_hebrew, get_language_name, language_codes_match, normalize_code, strip_niqqud,
    validate_language_code,
};

/// Test validation of language codes
#[test]
fn test_validate_language_code_withValidCodes_shouldReturnCorrectType() {
    assert!(matches!(validate_language_code("es").unwrap(), LanguageCodeType::Part1));
    assert!(matches!(validate_language_code("he").unwrap(), LanguageCodeType::Part1));
    assert!(matches!(validate_language_code("heb").unwrap(), LanguageCodeType::Part2T));
    assert!(matches!(validate_language_code("ger").unwrap(), LanguageCodeType::Part2B));
    assert!(matches!(validate_language_code(" EN ").unwrap(), LanguageCodeType::Part1));

    assert!(validate_language_code("zz").is_err());
    assert!(validate_language_code("123").is_err());
    assert!(validate_language_code("e").is_err());
}

/// Test normalization to two-letter codes
#[test]
fn test_normalize_code_withThreeLetterCodes_shouldPreferPart1() {
    assert_eq!(normalize_code("spa").unwrap(), "es");
    assert_eq!(normalize_code("heb").unwrap(), "he");
    assert_eq!(normalize_code("fre").unwrap(), "fr");
    assert_eq!(normalize_code("DE").unwrap(), "de");
    assert!(normalize_code("").is_err());
}

#[test]
fn test_language_codes_match_withEquivalentCodes_shouldMatch() {
    assert!(language_codes_match("he", "heb"));
    assert!(language_codes_match("de", "ger"));
    assert!(!language_codes_match("es", "he"));
    assert!(!language_codes_match("es", "invalid"));
}

#[test]
fn test_get_language_name_withValidCode_shouldReturnEnglishName() {
    assert_eq!(get_language_name("he").unwrap(), "Hebrew");
    assert_eq!(get_language_name("spa").unwrap(), "Spanish");
}

#[test]
fn test_contains_hebrew_withMixedScripts_shouldDetectHebrew() {
    assert!(contains_hebrew("בית"));
    assert!(contains_hebrew("Tel אביב"));
    assert!(!contains_hebrew("casa"));
    assert!(!contains_hebrew(""));
}

#[test]
fn test_strip_niqqud_withPointedWord_shouldKeepLetters() {
    assert_eq!(strip_niqqud("בַּיִת"), "בית");
    assert_eq!(strip_niqqud("בית־ספר"), "בית־ספר");
}
