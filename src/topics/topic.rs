// Topic: the closed set of subject categories a document can be assigned to.
//
// Declaration order matters. It is the iteration order everywhere (reports,
// charts, score maps) and the tie-break when two topics score the same.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A subject category with its own dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Medicine,
    History,
    Programming,
    Networks,
    Cryptography,
    Finance,
}

impl Topic {
    /// Every topic, in declaration order.
    pub const ALL: [Topic; 6] = [
        Topic::Medicine,
        Topic::History,
        Topic::Programming,
        Topic::Networks,
        Topic::Cryptography,
        Topic::Finance,
    ];

    /// Stable lower-case identifier. Also names the dictionary resource
    /// (`<id>.txt`).
    pub fn id(self) -> &'static str {
        match self {
            Topic::Medicine => "medicine",
            Topic::History => "history",
            Topic::Programming => "programming",
            Topic::Networks => "networks",
            Topic::Cryptography => "cryptography",
            Topic::Finance => "finance",
        }
    }

    /// Human-readable label used in reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Topic::Medicine => "Медицина",
            Topic::History => "История",
            Topic::Programming => "Программирование",
            Topic::Networks => "Сети",
            Topic::Cryptography => "Криптография",
            Topic::Finance => "Финансы",
        }
    }

    /// File name of this topic's dictionary resource.
    pub fn resource_name(self) -> String {
        format!("{}.txt", self.id())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Topic {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.id() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Topic::ALL.iter().map(|t| t.id()).collect();
                anyhow::anyhow!("Unknown topic '{s}'. Known topics: {}", known.join(", "))
            })
    }
}
