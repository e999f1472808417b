use newmm_core::persistence::{load_snapshot, save_snapshot};
use newmm_core::{segment, word_tokenize, DictionaryIndex, SegmentError, SegmentOptions, TokenKind, Tokenizer};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::{tempdir, NamedTempFile};

fn default_words(text: &str) -> Vec<String> {
    segment(Some(text), None, true).unwrap()
}

#[test]
fn segments_with_the_default_dictionary() {
    assert_eq!(
        default_words("ฉันรักภาษาไทยเพราะฉันเป็นคนไทย"),
        vec!["ฉัน", "รัก", "ภาษาไทย", "เพราะ", "ฉัน", "เป็น", "คนไทย"]
    );
    assert_eq!(default_words("ฉันไปโรงเรียน"), vec!["ฉัน", "ไป", "โรงเรียน"]);
    assert_eq!(default_words("วันนี้อากาศดีมาก"), vec!["วันนี้", "อากาศ", "ดี", "มาก"]);
}

#[test]
fn punctuation_and_brackets_are_isolated() {
    assert_eq!(default_words("(คนไม่เอา)"), vec!["(", "คน", "ไม่", "เอา", ")"]);
    assert_eq!(default_words("กม/ชม"), vec!["กม", "/", "ชม"]);
    assert_eq!(default_words("สีหน้า(รถ)"), vec!["สีหน้า", "(", "รถ", ")"]);
}

#[test]
fn numbers_are_atomic() {
    assert_eq!(default_words("19.84"), vec!["19.84"]);
    assert_eq!(default_words("127.0.0.1"), vec!["127.0.0.1"]);
    assert_eq!(default_words("19."), vec!["19", "."]);
    assert_eq!(default_words("19..."), vec!["19", "..."]);
    assert_eq!(default_words("USD1,984.42"), vec!["USD", "1,984.42"]);
    assert_eq!(default_words("123"), vec!["123"]);
}

#[test]
fn mixed_script_input() {
    assert_eq!(default_words("ไป ABC 123"), vec!["ไป", " ", "ABC", " ", "123"]);
    assert_eq!(default_words("hello world"), vec!["hello", " ", "world"]);
    assert_eq!(
        segment(Some("ไป ABC 123"), None, false).unwrap(),
        vec!["ไป", "ABC", "123"]
    );
}

#[test]
fn empty_and_absent_text() {
    assert!(segment(None, None, true).unwrap().is_empty());
    assert!(word_tokenize(Some(""), "newmm", None, false).unwrap().is_empty());
}

#[test]
fn unsupported_engine_is_rejected() {
    let err = word_tokenize(Some("ฉันไปโรงเรียน"), "deepcut", None, true).unwrap_err();
    assert!(matches!(err, SegmentError::UnsupportedEngine { .. }));
    assert_eq!(
        err.to_string(),
        "unsupported engine 'deepcut', only 'newmm' is supported"
    );
}

#[test]
fn custom_word_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("ไป\nมา\nไปมา\n".as_bytes()).unwrap();

    assert_eq!(
        segment(Some("ไปมาไป"), Some(file.path()), true).unwrap(),
        vec!["ไปมา", "ไป"]
    );

    let err = segment(Some("ไป"), Some(Path::new("/nonexistent/words.txt")), true).unwrap_err();
    assert!(matches!(err, SegmentError::NotFound { .. }));
}

#[test]
fn snapshot_segments_like_its_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("default.bin");
    let index = DictionaryIndex::default_thai().unwrap();
    save_snapshot(&index, &path).unwrap();

    let text = "ฉันรักภาษาไทย 2024";
    let from_words = Tokenizer::new(Arc::new(index));
    let from_snapshot = Tokenizer::new(Arc::new(load_snapshot(&path).unwrap()));
    assert_eq!(from_words.segment(text), from_snapshot.segment(text));
}

#[test]
fn tokens_carry_kinds() {
    let tokenizer = Tokenizer::with_options(
        Arc::new(DictionaryIndex::default_thai().unwrap()),
        SegmentOptions::default(),
    );
    let kinds: Vec<TokenKind> = tokenizer
        .segment("ราคา 1,000 บาท!")
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::ThaiText,
            TokenKind::WhitespaceRun,
            TokenKind::Number,
            TokenKind::WhitespaceRun,
            TokenKind::ThaiText,
            TokenKind::PunctuationRun,
        ]
    );
}
