// --- File: src/core/tcc.rs
//! Thai character cluster (TCC) boundaries.
//!
//! Every codepoint is mapped to a grammatical [`Role`] through a sorted range
//! table, and whether a cut may fall between two neighbouring codepoints is
//! read from a role-by-role rule table. Both tables are plain data so the
//! grammar can be checked without running the segmenter.

use crate::core::types::Offset;

/// Grammatical role of a codepoint in the cluster grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Consonant,
    /// เ แ โ ใ ไ, written before the consonant they belong to.
    LeadingVowel,
    /// ะ า ำ ๅ
    TrailingVowel,
    /// ั ิ ี ึ ื ็
    UpperVowel,
    /// ุ ู ฺ
    LowerVowel,
    ToneMark,
    /// ์ ํ ๎
    Sign,
    /// ๆ
    Repetition,
    /// ฯ ฿ ๏ ๚ ๛
    ThaiSymbol,
    ThaiDigit,
    /// Script-independent combining diacritics.
    CombiningMark,
    Space,
    /// Control and format codepoints (ZERO WIDTH SPACE, BOM, ...).
    Control,
    Other,
}

const ROLE_COUNT: usize = 14;

const ROLES: [Role; ROLE_COUNT] = [
    Role::Consonant,
    Role::LeadingVowel,
    Role::TrailingVowel,
    Role::UpperVowel,
    Role::LowerVowel,
    Role::ToneMark,
    Role::Sign,
    Role::Repetition,
    Role::ThaiSymbol,
    Role::ThaiDigit,
    Role::CombiningMark,
    Role::Space,
    Role::Control,
    Role::Other,
];

/// Sorted, non-overlapping codepoint ranges with an explicit role.
/// Anything not listed is `Space`, `Control` or `Other`.
static ROLE_RANGES: &[(char, char, Role)] = &[
    ('\u{0300}', '\u{036F}', Role::CombiningMark),
    ('\u{0E01}', '\u{0E2E}', Role::Consonant),
    ('\u{0E2F}', '\u{0E2F}', Role::ThaiSymbol),
    ('\u{0E30}', '\u{0E30}', Role::TrailingVowel),
    ('\u{0E31}', '\u{0E31}', Role::UpperVowel),
    ('\u{0E32}', '\u{0E33}', Role::TrailingVowel),
    ('\u{0E34}', '\u{0E37}', Role::UpperVowel),
    ('\u{0E38}', '\u{0E3A}', Role::LowerVowel),
    ('\u{0E3F}', '\u{0E3F}', Role::ThaiSymbol),
    ('\u{0E40}', '\u{0E44}', Role::LeadingVowel),
    ('\u{0E45}', '\u{0E45}', Role::TrailingVowel),
    ('\u{0E46}', '\u{0E46}', Role::Repetition),
    ('\u{0E47}', '\u{0E47}', Role::UpperVowel),
    ('\u{0E48}', '\u{0E4B}', Role::ToneMark),
    ('\u{0E4C}', '\u{0E4E}', Role::Sign),
    ('\u{0E4F}', '\u{0E4F}', Role::ThaiSymbol),
    ('\u{0E50}', '\u{0E59}', Role::ThaiDigit),
    ('\u{0E5A}', '\u{0E5B}', Role::ThaiSymbol),
    ('\u{1AB0}', '\u{1AFF}', Role::CombiningMark),
    ('\u{1DC0}', '\u{1DFF}', Role::CombiningMark),
    ('\u{20D0}', '\u{20FF}', Role::CombiningMark),
    ('\u{FE00}', '\u{FE0F}', Role::CombiningMark),
    ('\u{FE20}', '\u{FE2F}', Role::CombiningMark),
];

static BOUNDARY_RULES: [[bool; ROLE_COUNT]; ROLE_COUNT] = build_boundary_rules();

const fn cut_allowed(prev: Role, next: Role) -> bool {
    use Role::*;
    match (prev, next) {
        (LeadingVowel, Consonant) => false,
        (Space | Control, CombiningMark) => true,
        (_, CombiningMark) => false,
        (
            Consonant | LeadingVowel | TrailingVowel | UpperVowel | LowerVowel | ToneMark | Sign
            | Repetition,
            TrailingVowel | UpperVowel | LowerVowel | ToneMark | Sign | Repetition,
        ) => false,
        _ => true,
    }
}

const fn build_boundary_rules() -> [[bool; ROLE_COUNT]; ROLE_COUNT] {
    let mut table = [[true; ROLE_COUNT]; ROLE_COUNT];
    let mut prev = 0;
    while prev < ROLE_COUNT {
        let mut next = 0;
        while next < ROLE_COUNT {
            table[prev][next] = cut_allowed(ROLES[prev], ROLES[next]);
            next += 1;
        }
        prev += 1;
    }
    table
}

impl Role {
    pub fn of(c: char) -> Role {
        let found = ROLE_RANGES.binary_search_by(|&(lo, hi, _)| {
            if hi < c {
                std::cmp::Ordering::Less
            } else if lo > c {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
        match found {
            Ok(i) => ROLE_RANGES[i].2,
            Err(_) if c.is_whitespace() => Role::Space,
            Err(_) if is_control_or_format(c) => Role::Control,
            Err(_) => Role::Other,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Whether a cut is permitted between `prev` and `next`.
pub fn boundary_allowed(prev: char, next: char) -> bool {
    BOUNDARY_RULES[Role::of(prev).index()][Role::of(next).index()]
}

/// Codepoints in the Thai block.
pub fn is_thai(c: char) -> bool {
    ('\u{0E00}'..='\u{0E7F}').contains(&c)
}

fn is_control_or_format(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{00AD}' | '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2060}'..='\u{2064}' | '\u{FEFF}'
        )
}

/// The set of legal cut offsets for one piece of text.
///
/// Holds one flag per offset `0..=len`; both ends are always legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterBoundaries {
    legal: Vec<bool>,
}

impl ClusterBoundaries {
    /// O(n) single pass over adjacent codepoint pairs.
    pub fn analyze(text: &[char]) -> Self {
        let mut legal = Vec::with_capacity(text.len() + 1);
        legal.push(true);
        for pair in text.windows(2) {
            legal.push(boundary_allowed(pair[0], pair[1]));
        }
        if !text.is_empty() {
            legal.push(true);
        }
        Self { legal }
    }

    pub fn is_legal(&self, offset: Offset) -> bool {
        self.legal.get(offset).copied().unwrap_or(false)
    }

    /// Number of codepoints covered.
    pub fn len(&self) -> usize {
        self.legal.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest legal offset strictly after `offset`, clamped to the end.
    pub fn next_legal(&self, offset: Offset) -> Offset {
        (offset + 1..self.legal.len())
            .find(|&i| self.legal[i])
            .unwrap_or(self.len())
    }

    /// All legal offsets in ascending order.
    pub fn offsets(&self) -> impl Iterator<Item = Offset> + '_ {
        self.legal
            .iter()
            .enumerate()
            .filter_map(|(i, &legal)| legal.then_some(i))
    }
}

/// Splits `text` into its indivisible clusters.
pub fn clusters(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let boundaries = ClusterBoundaries::analyze(&chars);
    let offsets: Vec<Offset> = boundaries.offsets().collect();
    offsets
        .windows(2)
        .map(|w| chars[w[0]..w[1]].iter().collect())
        .collect()
}
