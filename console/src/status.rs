use crate::prelude::*;

const PHRASE_IN_PROGRESS: &str = "Индексация в процессе...";
const PHRASE_COMPLETED: &str = "Индексация успешно завершена!";
const PHRASE_FAILED: &str = "Ошибка индексации!";

/// State of the indexing job as reported by `GET /status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexingStatus {
    InProgress,
    Completed,
    Failed,
    Unknown,
}

impl IndexingStatus {
    /// Matches the backend's status text exactly.
    ///
    /// Both the human-readable phrases and the stable codes (`INDEXING`,
    /// `INDEXED`, `FAILED`) are recognized. Anything else is [`IndexingStatus::Unknown`].
    pub fn from_text(text: &str) -> IndexingStatus {
        match text {
            PHRASE_IN_PROGRESS | "INDEXING" => IndexingStatus::InProgress,
            PHRASE_COMPLETED | "INDEXED" => IndexingStatus::Completed,
            PHRASE_FAILED | "FAILED" => IndexingStatus::Failed,
            _ => IndexingStatus::Unknown,
        }
    }

    /// Reads the `status` field of a decoded status body.
    /// A missing field, a non-string value or a non-object body all give [`IndexingStatus::Unknown`].
    pub fn from_json(data: &serde_json::Value) -> IndexingStatus {
        match data.get("status").and_then(|s| s.as_str()) {
            Some(text) => IndexingStatus::from_text(text),
            None => IndexingStatus::Unknown,
        }
    }

    pub fn indicator(self) -> Indicator {
        match self {
            IndexingStatus::InProgress => Indicator::Blue,
            IndexingStatus::Completed => Indicator::Green,
            IndexingStatus::Failed => Indicator::Red,
            IndexingStatus::Unknown => Indicator::None,
        }
    }

    pub fn is_in_progress(self) -> bool {
        self == IndexingStatus::InProgress
    }
}

/// Display class of the status icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    None,
    Blue,
    Green,
    Red,
}

impl Indicator {
    pub fn class(self) -> &'static str {
        match self {
            Indicator::None => "",
            Indicator::Blue => "status-icon blue",
            Indicator::Green => "status-icon green",
            Indicator::Red => "status-icon red",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::None => write!(f, "none"),
            Indicator::Blue => write!(f, "blue"),
            Indicator::Green => write!(f, "green"),
            Indicator::Red => write!(f, "red"),
        }
    }
}
