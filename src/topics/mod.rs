// Topic classification: dictionaries, stemming, scoring.

pub mod analyzer;
pub mod defaults;
pub mod dictionary;
pub mod result;
pub mod source;
pub mod stemmer;
pub mod topic;
pub mod traits;

pub use analyzer::TopicAnalyzer;
pub use dictionary::DictionaryStore;
pub use result::AnalysisResult;
pub use topic::Topic;
