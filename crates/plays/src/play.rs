use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use boxoffice_core::{BillingError, BillingResult, ValueObject};

/// Play identifier.
///
/// Ids are assigned by whoever supplies the catalog and are mnemonic slugs
/// (e.g. `"hamlet"`), so this wraps a string rather than a generated id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for PlayId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Play kind tag.
///
/// The tag set is open: kinds the engine has no formula for are carried as
/// `Other` so the eventual error can name the offending tag instead of
/// silently falling back to some default formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayKind {
    Tragedy,
    Comedy,
    Other(String),
}

impl PlayKind {
    pub fn as_str(&self) -> &str {
        match self {
            PlayKind::Tragedy => "tragedy",
            PlayKind::Comedy => "comedy",
            PlayKind::Other(tag) => tag,
        }
    }
}

impl From<String> for PlayKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tragedy" => PlayKind::Tragedy,
            "comedy" => PlayKind::Comedy,
            _ => PlayKind::Other(value),
        }
    }
}

impl From<PlayKind> for String {
    fn from(value: PlayKind) -> Self {
        value.as_str().to_string()
    }
}

impl core::fmt::Display for PlayKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Play metadata: display name plus pricing kind.
///
/// Immutable; owned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    pub kind: PlayKind,
}

impl Play {
    pub fn new(name: impl Into<String>, kind: PlayKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl ValueObject for Play {}

/// Read-only mapping from play id to play metadata.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: HashMap<PlayId, Play>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: PlayId, play: Play) {
        self.plays.insert(id, play);
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Resolve a play reference.
    ///
    /// A missing id is a fatal configuration error, not a recoverable one.
    pub fn resolve(&self, id: &PlayId) -> BillingResult<&Play> {
        self.plays
            .get(id)
            .ok_or_else(|| BillingError::unresolved_play_id(id.as_str()))
    }
}

impl FromIterator<(PlayId, Play)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (PlayId, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}
