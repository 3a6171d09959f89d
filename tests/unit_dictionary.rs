// Unit tests for dictionary loading and lookup.
//
// Loading must never fail: missing, unreadable and empty resources all fall
// back to the built-in roots for that topic only.

use std::collections::HashMap;
use std::fs;

use anyhow::Result;

use topical::topics::defaults::default_roots;
use topical::topics::dictionary::{DictionaryOrigin, DictionaryStore, TopicDictionary};
use topical::topics::source::{BundledSource, DirectorySource};
use topical::topics::traits::DictionarySource;
use topical::topics::Topic;

/// In-memory source; topics mapped to `Err` simulate unreadable resources.
struct FixtureSource {
    files: HashMap<Topic, Result<String, String>>,
}

impl DictionarySource for FixtureSource {
    fn read(&self, topic: Topic) -> Result<Option<String>> {
        match self.files.get(&topic) {
            None => Ok(None),
            Some(Ok(text)) => Ok(Some(text.clone())),
            Some(Err(msg)) => anyhow::bail!("{msg}"),
        }
    }

    fn describe(&self) -> String {
        "fixture".to_string()
    }
}

fn write_all_but(dir: &std::path::Path, skip: Topic) {
    for topic in Topic::ALL {
        if topic == skip {
            continue;
        }
        fs::write(
            dir.join(topic.resource_name()),
            format!(
                "# {}\n{}root\n{} phrase\n",
                topic.id(),
                topic.id(),
                topic.id()
            ),
        )
        .unwrap();
    }
}

// ============================================================
// Loading and fallback
// ============================================================

#[test]
fn missing_resource_for_one_topic_uses_defaults_only_there() {
    let dir = tempfile::tempdir().unwrap();
    write_all_but(dir.path(), Topic::History);

    let store = DictionaryStore::load(&DirectorySource::new(dir.path()));

    let history = store.get(Topic::History);
    assert_eq!(history.origin(), DictionaryOrigin::Default);
    assert!(!history.roots().is_empty());
    assert_eq!(history.roots().len(), default_roots(Topic::History).len());
    assert!(history.phrases().is_empty());

    for topic in Topic::ALL.into_iter().filter(|t| *t != Topic::History) {
        let dict = store.get(topic);
        assert_eq!(dict.origin(), DictionaryOrigin::Resource, "{topic:?}");
        assert_eq!(dict.roots().len(), 1);
        assert!(dict.roots().contains(&format!("{}root", topic.id())));
        assert_eq!(dict.phrases(), [format!("{} phrase", topic.id())]);
    }
}

#[test]
fn empty_directory_falls_back_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let store = DictionaryStore::load(&DirectorySource::new(dir.path()));
    for (topic, dict) in store.iter() {
        assert_eq!(dict.origin(), DictionaryOrigin::Default, "{topic:?}");
        assert!(!dict.roots().is_empty());
    }
}

#[test]
fn unreadable_resource_falls_back() {
    let files = HashMap::from([
        (Topic::Medicine, Ok("врач\n".to_string())),
        (Topic::Finance, Err("disk on fire".to_string())),
    ]);
    let store = DictionaryStore::load(&FixtureSource { files });

    assert_eq!(
        store.get(Topic::Medicine).origin(),
        DictionaryOrigin::Resource
    );
    assert_eq!(
        store.get(Topic::Finance).origin(),
        DictionaryOrigin::Default
    );
    assert!(store.contains_word(Topic::Finance, "банк"));
}

#[test]
fn comment_only_resource_falls_back() {
    let files = HashMap::from([(Topic::Networks, Ok("# nothing here\n\n   \n".to_string()))]);
    let store = DictionaryStore::load(&FixtureSource { files });
    assert_eq!(
        store.get(Topic::Networks).origin(),
        DictionaryOrigin::Default
    );
    assert!(store.contains_word(Topic::Networks, "tcp"));
}

#[test]
fn bundled_dictionaries_load_as_resources() {
    let store = DictionaryStore::load(&BundledSource);
    for (topic, dict) in store.iter() {
        assert_eq!(dict.origin(), DictionaryOrigin::Resource, "{topic:?}");
        assert!(!dict.roots().is_empty(), "{topic:?}");
        assert!(!dict.phrases().is_empty(), "{topic:?}");
    }
    assert!(store
        .phrases(Topic::Cryptography)
        .iter()
        .any(|p| p == "информационная безопасность"));
}

// ============================================================
// Parsing
// ============================================================

#[test]
fn parse_lowercases_and_trims() {
    let dict = TopicDictionary::parse("  БАНК  \r\nЦенные   Бумаги\n");
    assert!(dict.roots().contains("банк"));
    // internal whitespace is kept as-is
    assert_eq!(dict.phrases(), ["ценные   бумаги"]);
}

#[test]
fn parse_tab_separated_line_is_a_phrase() {
    let dict = TopicDictionary::parse("открытый\tключ\n");
    assert!(dict.roots().is_empty());
    assert_eq!(dict.phrases().len(), 1);
}

#[test]
fn parse_deduplicates_roots() {
    let dict = TopicDictionary::parse("шифр\nшифр\nШИФР\n");
    assert_eq!(dict.roots().len(), 1);
}

// ============================================================
// contains_word
// ============================================================

#[test]
fn contains_word_exact_and_both_prefix_directions() {
    let store = DictionaryStore::defaults();
    assert!(store.contains_word(Topic::Medicine, "врач"));
    assert!(store.contains_word(Topic::Medicine, "леч"));
    assert!(store.contains_word(Topic::Medicine, "хирургическ"));
    assert!(!store.contains_word(Topic::Medicine, "биржа"));
}

#[test]
fn short_tokens_prefix_match_broadly() {
    // Inherited prefix rule: a one-letter token prefixes any root starting
    // with that letter. "и" (the conjunction) therefore counts for History
    // via "истор" and for Finance via "инвестиц". Left as-is on purpose;
    // this test pins the behavior so a change is a conscious one.
    let store = DictionaryStore::defaults();
    assert!(store.contains_word(Topic::History, "и"));
    assert!(store.contains_word(Topic::Finance, "и"));
    assert!(!store.contains_word(Topic::Medicine, "и"));
}

#[test]
fn empty_word_matches_any_nonempty_dictionary() {
    // Every root starts with "", so the empty string is always a hit.
    // The tokenizer never produces empty tokens.
    let store = DictionaryStore::defaults();
    assert!(store.contains_word(Topic::Programming, ""));
}
