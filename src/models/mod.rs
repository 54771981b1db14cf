use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Artifact is one published cartoon: metadata plus a popularity counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub title: String,
    /// URL or data URI of the image; opaque to the store.
    pub image: String,
    /// Theme label, stored as free text (not validated against `Theme`).
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Publication date as an ISO `YYYY-MM-DD` string; opaque to the store.
    pub date: String,
    pub likes: u32,
}

/// Caller-supplied fields for creating an artifact.
/// The store assigns `id` and starts `likes` at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct NewArtifact {
    pub title: String,
    pub image: String,
    pub theme: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
}

/// Theme is the closed set of filter selectors.
/// `All` means "no filter" and is never stored on an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    All,
    Future,
    Prosperity,
    Unity,
    Microfinance,
    Peace,
    Development,
}

impl Theme {
    /// All selectors in display order, `All` first.
    pub const ALL: [Theme; 7] = [
        Theme::All,
        Theme::Future,
        Theme::Prosperity,
        Theme::Unity,
        Theme::Microfinance,
        Theme::Peace,
        Theme::Development,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::All => "All",
            Theme::Future => "Future",
            Theme::Prosperity => "Prosperity",
            Theme::Unity => "Unity",
            Theme::Microfinance => "Microfinance",
            Theme::Peace => "Peace",
            Theme::Development => "Development",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown theme: {}", s))
    }
}

/// Change notification payload emitted after each successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChange {
    ArtifactAdded { id: String },
    ArtifactRemoved { id: String },
    LikeToggled { id: String, liked: bool },
}
