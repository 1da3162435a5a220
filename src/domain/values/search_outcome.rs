use serde::Serialize;

/// Result of a nearest-neighbour search. An empty `Matches` means the index
/// holds nothing close; `Unavailable` means the search itself failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SearchOutcome {
    Matches(Vec<String>),
    Unavailable(String),
}

impl SearchOutcome {
    pub fn phrases(&self) -> &[String] {
        match self {
            SearchOutcome::Matches(phrases) => phrases,
            SearchOutcome::Unavailable(_) => &[],
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SearchOutcome::Matches(_))
    }
}
