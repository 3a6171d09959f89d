// Unit tests for the topic analyzer and the result it produces.
//
// The analyzer is exercised against small hand-built dictionaries so the
// expected scores can be worked out by hand.

use std::sync::Arc;
use std::thread;

use topical::topics::analyzer::{count_occurrences, extract_words, PHRASE_WEIGHT};
use topical::topics::dictionary::{DictionaryStore, TopicDictionary};
use topical::topics::source::BundledSource;
use topical::topics::{AnalysisResult, Topic, TopicAnalyzer};

fn analyzer(dictionaries: &[(Topic, &str)]) -> TopicAnalyzer {
    let store = DictionaryStore::from_dictionaries(
        dictionaries
            .iter()
            .map(|(topic, text)| (*topic, TopicDictionary::parse(text))),
    );
    TopicAnalyzer::new(Arc::new(store))
}

fn assert_score_invariant(result: &AnalysisResult) {
    for topic in Topic::ALL {
        let words: u32 = result.word_matches(topic).map(|(_, c)| c).sum();
        let phrases: u32 = result.phrase_matches(topic).map(|(_, c)| c).sum();
        assert_eq!(
            result.score(topic),
            words + PHRASE_WEIGHT * phrases,
            "score invariant broken for {topic:?}"
        );
        assert!(result.matches(topic).values().all(|c| *c >= 1));
    }
}

// ============================================================
// Tokenization
// ============================================================

#[test]
fn tokens_are_letter_runs_lowercased() {
    assert_eq!(
        extract_words("Врач-терапевт: 3 пациента, TCP/IP!"),
        vec!["врач", "терапевт", "пациента", "tcp", "ip"]
    );
}

#[test]
fn no_letters_no_tokens() {
    assert!(extract_words("123 456 -- !!! 7.5%").is_empty());
}

// ============================================================
// End-to-end scoring
// ============================================================

#[test]
fn medicine_sentence_scores_word_matches() {
    let analyzer = analyzer(&[(Topic::Medicine, "врач\nболезн\nлечен\n")]);
    let result = analyzer.analyze("врач лечение пациента");

    assert_eq!(result.total_words(), 3);
    // "врач" exact, "лечение" -> "леч" prefixes "лечен", "пациента" -> "пациент" misses
    assert_eq!(result.score(Topic::Medicine), 2);
    assert_eq!(result.matches(Topic::Medicine)["врач"], 1);
    assert_eq!(result.matches(Topic::Medicine)["леч"], 1);
    assert!(!result.matches(Topic::Medicine).contains_key("пациент"));
    assert_eq!(result.top_topic(), Topic::Medicine);
    assert_score_invariant(&result);
}

#[test]
fn repeated_phrase_counts_twice_and_scores_double() {
    let analyzer = analyzer(&[(
        Topic::Cryptography,
        "zzzz\nинформационная безопасность\n",
    )]);
    let text = "Информационная безопасность важна. Мы изучаем информационная безопасность.";
    let result = analyzer.analyze(text);

    assert_eq!(
        result.matches(Topic::Cryptography)["информационная безопасность"],
        2
    );
    assert_eq!(result.score(Topic::Cryptography), 4);
    assert_score_invariant(&result);
}

#[test]
fn phrase_equal_to_whole_text_counts_once() {
    let analyzer = analyzer(&[(Topic::Finance, "ценные бумаги\n")]);
    let result = analyzer.analyze("ценные бумаги");
    assert_eq!(result.matches(Topic::Finance)["ценные бумаги"], 1);
    assert_eq!(result.phrase_matches(Topic::Finance).count(), 1);
}

#[test]
fn overlapping_phrase_occurrences_are_not_double_counted() {
    assert_eq!(count_occurrences("ха ха ха", "ха ха"), 1);
    let analyzer = analyzer(&[(Topic::History, "ха ха\nzzzz\n")]);
    let result = analyzer.analyze("ха ха ха");
    assert_eq!(result.matches(Topic::History)["ха ха"], 1);
}

#[test]
fn phrases_match_across_case_but_not_across_line_breaks() {
    let analyzer = analyzer(&[(Topic::Networks, "локальная сеть\nzzzz\n")]);
    let result = analyzer.analyze("ЛОКАЛЬНАЯ СЕТЬ и локальная\nсеть");
    assert_eq!(result.matches(Topic::Networks)["локальная сеть"], 1);
}

#[test]
fn word_can_count_for_several_topics() {
    // "алгоритм" is a default root for both Programming and Cryptography.
    let analyzer = TopicAnalyzer::new(Arc::new(DictionaryStore::defaults()));
    let result = analyzer.analyze("алгоритм");
    assert_eq!(result.score(Topic::Programming), 1);
    assert_eq!(result.score(Topic::Cryptography), 1);
    // tie goes to the topic declared first
    assert_eq!(result.top_topic(), Topic::Programming);
}

#[test]
fn percentages_use_total_word_count() {
    let analyzer = analyzer(&[(Topic::Finance, "банк\n")]);
    let result = analyzer.analyze("банк банки zzz www");
    assert_eq!(result.total_words(), 4);
    assert_eq!(result.score(Topic::Finance), 2);
    assert!((result.percentage(Topic::Finance) - 50.0).abs() < 1e-9);
}

// ============================================================
// Degenerate input
// ============================================================

#[test]
fn empty_text_gives_all_zero_and_first_topic() {
    let analyzer = TopicAnalyzer::new(Arc::new(DictionaryStore::defaults()));
    let result = analyzer.analyze("");
    assert_eq!(result.total_words(), 0);
    for topic in Topic::ALL {
        assert_eq!(result.score(topic), 0);
        assert_eq!(result.percentage(topic), 0.0);
        assert!(result.matches(topic).is_empty());
    }
    for _ in 0..3 {
        assert_eq!(result.top_topic(), Topic::Medicine);
    }
}

#[test]
fn digits_and_punctuation_only() {
    let analyzer = TopicAnalyzer::new(Arc::new(DictionaryStore::defaults()));
    let result = analyzer.analyze("2024-01-01, 42%!");
    assert_eq!(result.total_words(), 0);
    assert_eq!(result.top_topic(), Topic::Medicine);
}

// ============================================================
// Invariants over realistic text
// ============================================================

#[test]
fn invariant_holds_with_bundled_dictionaries() {
    let analyzer = TopicAnalyzer::new(Arc::new(DictionaryStore::load(&BundledSource)));
    let text = "Информационная безопасность опирается на криптографию: открытый ключ \
                и закрытый ключ используются для шифрования. Сервер и клиент обмениваются \
                пакетами по протоколу TCP. Банк выдаёт кредит под процентная ставка.";
    let result = analyzer.analyze(text);
    assert_score_invariant(&result);
    assert_eq!(result.top_topic(), Topic::Cryptography);
}

#[test]
fn analysis_is_deterministic() {
    let analyzer = TopicAnalyzer::new(Arc::new(DictionaryStore::load(&BundledSource)));
    let text = "Врач поставил диагноз и назначил лечение.";
    assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
}

#[test]
fn shared_store_across_threads() {
    let analyzer = TopicAnalyzer::new(Arc::new(DictionaryStore::load(&BundledSource)));
    let texts = [
        "Врач осмотрел пациента и назначил терапию.",
        "Римская империя пережила много войн.",
        "Функция вызывает метод класса в цикле.",
        "Биржа и банк: инвестиции и капитал.",
    ];
    let expected = [
        Topic::Medicine,
        Topic::History,
        Topic::Programming,
        Topic::Finance,
    ];

    let handles: Vec<_> = texts
        .iter()
        .map(|text| {
            let analyzer = analyzer.clone();
            let text = text.to_string();
            thread::spawn(move || analyzer.analyze(&text).top_topic())
        })
        .collect();

    for (handle, want) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), want);
    }
}
