// --- File: src/core/graph.rs
//! Maximal matching over a Thai span as a shortest path on a DAG.
//!
//! Nodes are the legal cluster boundaries of the span. Edges are dictionary
//! words between two legal boundaries, plus one fallback edge to the next
//! boundary from any node that starts no dictionary word. Boundaries are
//! totally ordered, so a single dynamic-programming pass solves it.

use crate::core::tcc::ClusterBoundaries;
use crate::core::trie::DictionaryIndex;
use crate::core::types::Offset;
use std::cmp::Ordering;

/// Cost of one dictionary-backed token.
pub const TOKEN_COST: i64 = 1_000;
/// Cost of one fallback (out-of-vocabulary) cluster.
pub const UNKNOWN_COST: i64 = 1_000_000;
/// Bonus per codepoint covered by an edge.
pub const LENGTH_BONUS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSource {
    Dictionary,
    Unknown,
}

/// One word candidate between two legal boundaries, relative to the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: Offset,
    pub to: Offset,
    pub source: EdgeSource,
}

impl Edge {
    fn cost(&self) -> i64 {
        let base = match self.source {
            EdgeSource::Dictionary => TOKEN_COST,
            EdgeSource::Unknown => UNKNOWN_COST,
        };
        base - LENGTH_BONUS * (self.to - self.from) as i64
    }
}

/// Accumulated score of the best known path from a node to the span end.
///
/// Ordered by unknown edges first, so a path made only of dictionary words
/// beats any path through an unknown cluster regardless of span length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathScore {
    unknown: u32,
    cost: i64,
    edges: u32,
}

impl PathScore {
    const START: PathScore = PathScore {
        unknown: 0,
        cost: 0,
        edges: 0,
    };

    fn extend(self, edge: &Edge) -> PathScore {
        PathScore {
            unknown: self.unknown + u32::from(edge.source == EdgeSource::Unknown),
            cost: self.cost + edge.cost(),
            edges: self.edges + 1,
        }
    }
}

impl Ord for PathScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.unknown
            .cmp(&other.unknown)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| self.edges.cmp(&other.edges))
    }
}

impl PartialOrd for PathScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The candidate graph of one Thai span.
#[derive(Debug, Clone)]
pub struct SegmentationGraph {
    len: usize,
    /// Outgoing edges per node, longest first.
    edges: Vec<Vec<Edge>>,
}

impl SegmentationGraph {
    /// Builds the graph for `span`, which must be exactly one Thai span.
    pub fn build(span: &[char], dictionary: &DictionaryIndex) -> Self {
        let boundaries = ClusterBoundaries::analyze(span);
        let mut edges = vec![Vec::new(); span.len() + 1];

        for from in boundaries.offsets().filter(|&i| i < span.len()) {
            let out = &mut edges[from];
            for to in dictionary.longest_matches_at(span, from) {
                if boundaries.is_legal(to) {
                    out.push(Edge {
                        from,
                        to,
                        source: EdgeSource::Dictionary,
                    });
                }
            }
            if out.is_empty() {
                out.push(Edge {
                    from,
                    to: boundaries.next_legal(from),
                    source: EdgeSource::Unknown,
                });
            }
        }

        Self {
            len: span.len(),
            edges,
        }
    }

    /// Outgoing edges of `node`, longest first.
    pub fn edges_from(&self, node: Offset) -> &[Edge] {
        self.edges.get(node).map_or(&[], Vec::as_slice)
    }

    /// Minimum-cost path from the span start to its end.
    ///
    /// Solved in one right-to-left pass: each node keeps the cheapest
    /// continuation to the span end. Ties go to fewer edges, then to the edge
    /// enumerated first (longest first), so the winning path is the first
    /// optimal one in left-to-right, longest-first order.
    pub fn shortest_path(&self) -> Vec<Edge> {
        if self.len == 0 {
            return Vec::new();
        }

        let mut suffix: Vec<Option<PathScore>> = vec![None; self.len + 1];
        let mut choice: Vec<Option<Edge>> = vec![None; self.len + 1];
        suffix[self.len] = Some(PathScore::START);

        for from in (0..self.len).rev() {
            for edge in &self.edges[from] {
                let Some(rest) = suffix[edge.to] else {
                    continue;
                };
                let candidate = rest.extend(edge);
                if suffix[from].map_or(true, |current| candidate < current) {
                    suffix[from] = Some(candidate);
                    choice[from] = Some(*edge);
                }
            }
        }

        let mut path = Vec::new();
        let mut node = 0;
        while node < self.len {
            let edge = choice[node].expect("every legal boundary has an outgoing edge");
            path.push(edge);
            node = edge.to;
        }
        path
    }
}

/// Segments one Thai span into word edges, left to right.
pub fn solve(span: &[char], dictionary: &DictionaryIndex) -> Vec<Edge> {
    let path = SegmentationGraph::build(span, dictionary).shortest_path();
    log::trace!(
        "solved span of {} codepoints into {} words",
        span.len(),
        path.len()
    );
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> DictionaryIndex {
        DictionaryIndex::from_words(words.iter().copied()).unwrap()
    }

    fn words(text: &str, dictionary: &DictionaryIndex) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        solve(&chars, dictionary)
            .iter()
            .map(|e| chars[e.from..e.to].iter().collect())
            .collect()
    }

    #[test]
    fn prefers_fewer_longer_words() {
        let dictionary = dict(&["ภาษา", "ไทย", "ภาษาไทย", "คน", "คนไทย"]);
        assert_eq!(words("ภาษาไทย", &dictionary), vec!["ภาษาไทย"]);
        assert_eq!(words("คนไทย", &dictionary), vec!["คนไทย"]);
    }

    #[test]
    fn longest_match_is_not_greedy() {
        // Taking "ไปมา" first would strand "ก".
        let dictionary = dict(&["ไป", "ไปมา", "มาก"]);
        assert_eq!(words("ไปมาก", &dictionary), vec!["ไป", "มาก"]);
    }

    #[test]
    fn dictionary_words_must_end_on_a_cluster_boundary() {
        // "ก" would split the ก+ั cluster.
        let dictionary = dict(&["ก", "กั", "กัน"]);
        assert_eq!(words("กัน", &dictionary), vec!["กัน"]);

        let dictionary = dict(&["ไม", "ไม่"]);
        assert_eq!(words("ไม่", &dictionary), vec!["ไม่"]);
    }

    #[test]
    fn unknown_text_degrades_to_clusters() {
        let dictionary = dict(&["ไป"]);
        assert_eq!(words("ฉันรัก", &dictionary), vec!["ฉั", "น", "รั", "ก"]);
    }

    #[test]
    fn unknown_clusters_are_avoided_when_possible() {
        let dictionary = dict(&["ก", "กข", "ขค"]);
        assert_eq!(words("กขค", &dictionary), vec!["ก", "ขค"]);
    }

    #[test]
    fn dictionary_path_wins_over_long_spans() {
        // A single unknown cluster must not be traded for fewer tokens, even
        // when the dictionary-only path is over a thousand words long.
        let long_word = format!("ง{}", "ค".repeat(1100));
        let dictionary = dict(&["ก", "กขง", "ค", long_word.as_str()]);
        let text = format!("กขง{}", "ค".repeat(1100));
        let chars: Vec<char> = text.chars().collect();

        let path = solve(&chars, &dictionary);
        assert!(path.iter().all(|e| e.source == EdgeSource::Dictionary));
        assert_eq!(path.len(), 1101);
        assert_eq!(path[0], Edge { from: 0, to: 3, source: EdgeSource::Dictionary });
    }

    #[test]
    fn fallback_edges_only_where_no_word_starts() {
        let dictionary = dict(&["คน", "ไม่"]);
        let chars: Vec<char> = "คนไม่".chars().collect();
        let graph = SegmentationGraph::build(&chars, &dictionary);
        assert_eq!(
            graph.edges_from(0),
            &[Edge {
                from: 0,
                to: 2,
                source: EdgeSource::Dictionary
            }]
        );
        assert_eq!(
            graph.edges_from(1),
            &[Edge {
                from: 1,
                to: 2,
                source: EdgeSource::Unknown
            }]
        );
        assert!(graph.edges_from(3).is_empty());
    }

    #[test]
    fn equal_cost_prefers_first_found() {
        // Both "กข|ค" and "ก|ขค" cost two tokens; the longer first edge wins.
        let dictionary = dict(&["ก", "กข", "ค", "ขค"]);
        assert_eq!(words("กขค", &dictionary), vec!["กข", "ค"]);
    }

    #[test]
    fn empty_span_has_no_path() {
        assert!(solve(&[], &dict(&["ก"])).is_empty());
    }
}
