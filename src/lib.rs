// Topical: dictionary-based topic classification for Russian-language text.
//
// This is the library root. `topics` is the classification core; the other
// modules are the plumbing around it (configuration, reading documents,
// rendering results).

pub mod config;
pub mod ingest;
pub mod output;
pub mod topics;
