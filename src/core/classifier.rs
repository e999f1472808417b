// --- File: src/core/classifier.rs
//! Partitions input into typed spans before any dictionary work happens.
//!
//! Only `ThaiText` spans are handed to the graph solver; every other span is
//! emitted as one token.

use crate::core::tcc::{is_thai, ClusterBoundaries, Role};
use crate::core::types::{Offset, Span, TokenKind};

/// Scan class of a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    Digit,
    Latin,
    /// Brackets and quotation marks, never merged with a neighbour.
    Enclosing,
    Punctuation,
    Control,
    Script,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            return CharClass::Whitespace;
        }
        if is_digit(c) {
            return CharClass::Digit;
        }
        if is_thai(c) {
            return CharClass::Script;
        }
        match Role::of(c) {
            Role::Control => return CharClass::Control,
            Role::CombiningMark => return CharClass::Script,
            _ => {}
        }
        if is_latin_letter(c) {
            CharClass::Latin
        } else if c.is_alphanumeric() {
            CharClass::Script
        } else if is_enclosing(c) {
            CharClass::Enclosing
        } else {
            CharClass::Punctuation
        }
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('\u{0E50}'..='\u{0E59}').contains(&c)
}

fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (('\u{00C0}'..='\u{024F}').contains(&c) && c.is_alphabetic())
}

fn is_enclosing(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '<'
            | '>'
            | '"'
            | '\''
            | '«'
            | '»'
            | '‘'
            | '’'
            | '“'
            | '”'
            | '「'
            | '」'
    )
}

fn is_number_separator(c: char) -> bool {
    c == '.' || c == ','
}

/// Splits the text into contiguous, non-overlapping spans covering every
/// offset.
///
/// `boundaries` must be the cluster boundaries of the same `text`; an atomic
/// run is extended to the next legal boundary rather than ending inside a
/// cluster.
pub fn classify(text: &[char], boundaries: &ClusterBoundaries) -> Vec<Span> {
    assert_eq!(text.len(), boundaries.len(), "boundaries computed for other text");

    let mut spans: Vec<Span> = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let class = CharClass::of(text[pos]);
        let (mut end, kind) = match class {
            CharClass::Whitespace => (
                scan_while(text, pos, |c| CharClass::of(c) == CharClass::Whitespace),
                TokenKind::WhitespaceRun,
            ),
            CharClass::Digit => (scan_number(text, pos), TokenKind::Number),
            CharClass::Latin => (
                scan_while(text, pos, |c| CharClass::of(c) == CharClass::Latin),
                TokenKind::LatinRun,
            ),
            CharClass::Enclosing => (pos + 1, TokenKind::PunctuationRun),
            CharClass::Punctuation => {
                let first = text[pos];
                (scan_while(text, pos, |c| c == first), TokenKind::PunctuationRun)
            }
            CharClass::Control => (pos + 1, TokenKind::Other),
            CharClass::Script => (
                scan_while(text, pos, |c| CharClass::of(c) == CharClass::Script),
                TokenKind::ThaiText,
            ),
        };

        if !boundaries.is_legal(end) {
            end = boundaries.next_legal(end);
        }
        push_span(&mut spans, Span::new(pos, end, kind));
        pos = end;
    }

    let covered = spans.last().map_or(0, |s| s.end);
    assert_eq!(covered, text.len(), "span partition does not cover the input");
    spans
}

fn push_span(spans: &mut Vec<Span>, span: Span) {
    log::trace!("{} span of {} at {}", span.kind, span.len(), span.start);
    spans.push(span);
}

fn scan_while(text: &[char], start: Offset, accept: impl Fn(char) -> bool) -> Offset {
    let mut end = start + 1;
    while end < text.len() && accept(text[end]) {
        end += 1;
    }
    end
}

/// Digits, continuing through a `.` or `,` only when a digit follows it.
fn scan_number(text: &[char], start: Offset) -> Offset {
    let mut end = start + 1;
    while end < text.len() {
        if is_digit(text[end]) {
            end += 1;
        } else if is_number_separator(text[end])
            && text.get(end + 1).is_some_and(|&c| is_digit(c))
        {
            end += 2;
        } else {
            break;
        }
    }
    end
}
