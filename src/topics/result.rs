// AnalysisResult: the frozen outcome of one analysis.
//
// Built once by the analyzer and never mutated. Reporting reads it through
// the accessors below; derived values (top topic, percentages) are computed
// from the stored maps on demand.

use std::collections::BTreeMap;

use serde::Serialize;

use super::topic::Topic;

/// Per-topic scores and match provenance for a single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    scores: BTreeMap<Topic, u32>,
    matches: BTreeMap<Topic, BTreeMap<String, u32>>,
    total_words: usize,
}

impl AnalysisResult {
    /// Assemble a result. Topics absent from either map are filled in with a
    /// zero score and no matches, so every topic is always present.
    pub fn new(
        scores: BTreeMap<Topic, u32>,
        matches: BTreeMap<Topic, BTreeMap<String, u32>>,
        total_words: usize,
    ) -> Self {
        let mut scores = scores;
        let mut matches = matches;
        for topic in Topic::ALL {
            scores.entry(topic).or_insert(0);
            matches.entry(topic).or_default();
        }
        Self {
            scores,
            matches,
            total_words,
        }
    }

    /// Number of word tokens in the document, counted before stemming.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn score(&self, topic: Topic) -> u32 {
        self.scores.get(&topic).copied().unwrap_or(0)
    }

    /// Scores for every topic, in declaration order.
    pub fn scores(&self) -> &BTreeMap<Topic, u32> {
        &self.scores
    }

    /// Matched term (word stem or phrase) -> occurrence count for `topic`.
    /// Empty when nothing matched.
    pub fn matches(&self, topic: Topic) -> &BTreeMap<String, u32> {
        static EMPTY: BTreeMap<String, u32> = BTreeMap::new();
        self.matches.get(&topic).unwrap_or(&EMPTY)
    }

    /// Single-word matches for `topic`.
    pub fn word_matches(&self, topic: Topic) -> impl Iterator<Item = (&str, u32)> {
        self.matches(topic)
            .iter()
            .filter(|(term, _)| !is_phrase(term))
            .map(|(term, count)| (term.as_str(), *count))
    }

    /// Phrase matches for `topic`.
    pub fn phrase_matches(&self, topic: Topic) -> impl Iterator<Item = (&str, u32)> {
        self.matches(topic)
            .iter()
            .filter(|(term, _)| is_phrase(term))
            .map(|(term, count)| (term.as_str(), *count))
    }

    /// The topic with the strictly greatest score. Ties go to the topic
    /// declared first, so an all-zero result yields `Topic::Medicine`.
    pub fn top_topic(&self) -> Topic {
        let mut best = Topic::ALL[0];
        for topic in Topic::ALL {
            if self.score(topic) > self.score(best) {
                best = topic;
            }
        }
        best
    }

    /// `score * 100 / total_words`, or 0 for an empty document. Phrase
    /// weighting means this can exceed 100.
    pub fn percentage(&self, topic: Topic) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        f64::from(self.score(topic)) * 100.0 / self.total_words as f64
    }
}

/// Phrases always contain whitespace; word tokens never do.
fn is_phrase(term: &str) -> bool {
    term.contains(char::is_whitespace)
}
