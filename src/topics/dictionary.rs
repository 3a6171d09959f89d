// Dictionary store: per-topic root sets and phrase lists.
//
// Built once from a DictionarySource and read-only afterwards. Nothing here
// hands out mutable access, so a store can be shared between threads behind
// an Arc without locking.

use std::collections::{BTreeMap, HashSet};

use tracing::{info, warn};

use super::defaults::default_roots;
use super::topic::Topic;
use super::traits::DictionarySource;

/// Where a topic's vocabulary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryOrigin {
    /// Parsed from the topic's dictionary resource.
    Resource,
    /// The resource was missing, unreadable or empty; built-in roots are used.
    Default,
}

/// The finalized vocabulary for a single topic.
#[derive(Debug, Clone)]
pub struct TopicDictionary {
    roots: HashSet<String>,
    phrases: Vec<String>,
    origin: DictionaryOrigin,
}

impl TopicDictionary {
    /// Parse dictionary text: one entry per line, `#` comments and blank
    /// lines ignored, entries lower-cased and trimmed. Lines containing
    /// whitespace are phrases, everything else is a root.
    pub fn parse(content: &str) -> Self {
        let mut roots = HashSet::new();
        let mut phrases: Vec<String> = Vec::new();

        for line in content.lines() {
            let entry = line.trim().to_lowercase();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if entry.contains(char::is_whitespace) {
                // Each phrase is counted once per analysis; a repeated line
                // would double its score without a second detail entry.
                if !phrases.contains(&entry) {
                    phrases.push(entry);
                }
            } else {
                roots.insert(entry);
            }
        }

        Self {
            roots,
            phrases,
            origin: DictionaryOrigin::Resource,
        }
    }

    /// The built-in fallback for `topic`.
    pub fn fallback(topic: Topic) -> Self {
        Self {
            roots: default_roots(topic).iter().map(|r| r.to_string()).collect(),
            phrases: Vec::new(),
            origin: DictionaryOrigin::Default,
        }
    }

    /// Exact match, or either string is a prefix of the other.
    ///
    /// The prefix rule absorbs stemmer imprecision: "леч" (from "лечение")
    /// still hits the root "лечен". It also means very short roots or tokens
    /// match broadly.
    pub fn contains_word(&self, word: &str) -> bool {
        if self.roots.contains(word) {
            return true;
        }
        self.roots
            .iter()
            .any(|root| word.starts_with(root.as_str()) || root.starts_with(word))
    }

    pub fn roots(&self) -> &HashSet<String> {
        &self.roots
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn origin(&self) -> DictionaryOrigin {
        self.origin
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.phrases.is_empty()
    }
}

/// Immutable collection of every topic's dictionary.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    entries: BTreeMap<Topic, TopicDictionary>,
}

impl DictionaryStore {
    /// Load every topic from `source`, falling back to the built-in roots for
    /// any topic whose resource is missing, unreadable or empty. Never fails.
    pub fn load(source: &dyn DictionarySource) -> Self {
        let mut entries = BTreeMap::new();

        for topic in Topic::ALL {
            let dictionary = match source.read(topic) {
                Ok(Some(content)) => {
                    let parsed = TopicDictionary::parse(&content);
                    if parsed.is_empty() {
                        warn!(
                            topic = topic.id(),
                            source = %source.describe(),
                            "Dictionary resource has no entries, using defaults"
                        );
                        TopicDictionary::fallback(topic)
                    } else {
                        parsed
                    }
                }
                Ok(None) => {
                    warn!(
                        topic = topic.id(),
                        source = %source.describe(),
                        "Dictionary resource not found, using defaults"
                    );
                    TopicDictionary::fallback(topic)
                }
                Err(e) => {
                    warn!(
                        topic = topic.id(),
                        source = %source.describe(),
                        error = %e,
                        "Failed to load dictionary, using defaults"
                    );
                    TopicDictionary::fallback(topic)
                }
            };

            info!(
                topic = topic.id(),
                roots = dictionary.roots.len(),
                phrases = dictionary.phrases.len(),
                origin = ?dictionary.origin,
                "Loaded dictionary"
            );
            entries.insert(topic, dictionary);
        }

        Self { entries }
    }

    /// Store built only from the built-in roots.
    pub fn defaults() -> Self {
        Self {
            entries: Topic::ALL
                .into_iter()
                .map(|topic| (topic, TopicDictionary::fallback(topic)))
                .collect(),
        }
    }

    /// Store built from already-finalized dictionaries. Topics missing from
    /// `dictionaries` get the built-in roots.
    pub fn from_dictionaries(
        dictionaries: impl IntoIterator<Item = (Topic, TopicDictionary)>,
    ) -> Self {
        let mut entries: BTreeMap<Topic, TopicDictionary> = dictionaries.into_iter().collect();
        for topic in Topic::ALL {
            entries
                .entry(topic)
                .or_insert_with(|| TopicDictionary::fallback(topic));
        }
        Self { entries }
    }

    /// The dictionary for `topic`. Every topic is always present.
    pub fn get(&self, topic: Topic) -> &TopicDictionary {
        &self.entries[&topic]
    }

    /// See [`TopicDictionary::contains_word`].
    pub fn contains_word(&self, topic: Topic, word: &str) -> bool {
        self.get(topic).contains_word(word)
    }

    /// Phrases for `topic`, in file order.
    pub fn phrases(&self, topic: Topic) -> &[String] {
        self.get(topic).phrases()
    }

    /// Iterate dictionaries in topic declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Topic, &TopicDictionary)> {
        self.entries.iter().map(|(topic, dict)| (*topic, dict))
    }
}
