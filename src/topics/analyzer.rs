// Topic analyzer: raw text in, AnalysisResult out.
//
// Two independent evidence passes feed the same score table:
//   - every word token is stemmed and checked against each topic's roots
//     (1 point per hit);
//   - the lower-cased text is scanned for each topic's phrases
//     (2 points per non-overlapping occurrence).

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use regex_lite::Regex;
use tracing::{debug, info};

use super::dictionary::DictionaryStore;
use super::result::AnalysisResult;
use super::stemmer::stem;
use super::topic::Topic;

/// Points added per phrase occurrence. Phrases are more specific evidence
/// than single words.
pub const PHRASE_WEIGHT: u32 = 2;

/// Maximal runs of Cyrillic or Latin letters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[а-яА-ЯёЁa-zA-Z]+").expect("word pattern is valid"));

/// Classifies documents against a shared, read-only dictionary store.
///
/// Cloning is cheap; clones share the same store, so one analyzer per worker
/// thread is fine.
#[derive(Debug, Clone)]
pub struct TopicAnalyzer {
    dictionaries: Arc<DictionaryStore>,
}

impl TopicAnalyzer {
    pub fn new(dictionaries: Arc<DictionaryStore>) -> Self {
        Self { dictionaries }
    }

    pub fn dictionaries(&self) -> &DictionaryStore {
        &self.dictionaries
    }

    /// Score `text` against every topic. Total: empty or letter-free text
    /// gives zero words and all-zero scores.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let words = extract_words(text);
        debug!(words = words.len(), "Extracted words");

        let mut scores: BTreeMap<Topic, u32> = Topic::ALL.into_iter().map(|t| (t, 0)).collect();
        let mut matches: BTreeMap<Topic, BTreeMap<String, u32>> =
            Topic::ALL.into_iter().map(|t| (t, BTreeMap::new())).collect();

        for word in &words {
            let stemmed = stem(word);
            for topic in Topic::ALL {
                if self.dictionaries.contains_word(topic, &stemmed) {
                    *matches
                        .entry(topic)
                        .or_default()
                        .entry(stemmed.clone())
                        .or_insert(0) += 1;
                    *scores.entry(topic).or_insert(0) += 1;
                }
            }
        }

        let lower = text.to_lowercase();
        for topic in Topic::ALL {
            for phrase in self.dictionaries.phrases(topic) {
                let count = count_occurrences(&lower, phrase);
                if count > 0 {
                    matches.entry(topic).or_default().insert(phrase.clone(), count);
                    *scores.entry(topic).or_insert(0) += count * PHRASE_WEIGHT;
                }
            }
        }

        let result = AnalysisResult::new(scores, matches, words.len());
        info!(
            total_words = result.total_words(),
            top_topic = result.top_topic().id(),
            top_score = result.score(result.top_topic()),
            "Analysis complete"
        );
        result
    }
}

/// Lower-cased word tokens in document order.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Non-overlapping occurrences of `needle` in `haystack`, scanning left to
/// right. An empty needle never matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count() as u32
}
