use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ProjectId
// ---------------------------------------------------------------------------

/// Opaque project identifier. Stored as a bare JSON string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh identifier for a project that has never been saved.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ---------------------------------------------------------------------------
// StudioKind
// ---------------------------------------------------------------------------

/// The three editors a project can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StudioKind {
    Video,
    Image,
    Audio,
}

impl StudioKind {
    pub const ALL: [StudioKind; 3] = [StudioKind::Video, StudioKind::Image, StudioKind::Audio];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudioKind::Video => "video",
            StudioKind::Image => "image",
            StudioKind::Audio => "audio",
        }
    }
}

impl fmt::Display for StudioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Studio
// ---------------------------------------------------------------------------

/// Screen selector: the dashboard or one of the editors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Studio {
    #[default]
    Home,
    Video,
    Image,
    Audio,
}

impl Studio {
    pub fn is_home(&self) -> bool {
        matches!(self, Studio::Home)
    }

    /// The editor kind behind this screen, `None` for the dashboard.
    pub fn kind(&self) -> Option<StudioKind> {
        match self {
            Studio::Home => None,
            Studio::Video => Some(StudioKind::Video),
            Studio::Image => Some(StudioKind::Image),
            Studio::Audio => Some(StudioKind::Audio),
        }
    }
}

impl From<StudioKind> for Studio {
    fn from(kind: StudioKind) -> Self {
        match kind {
            StudioKind::Video => Studio::Video,
            StudioKind::Image => Studio::Image,
            StudioKind::Audio => Studio::Audio,
        }
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// One saved unit of user work.
///
/// `data` belongs to the owning studio. Nothing in this crate looks inside
/// it; the default `serde_json::Value` keeps it opaque while a studio can
/// pick a concrete payload type or go through [`Project::decode_data`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project<D = serde_json::Value> {
    pub id: ProjectId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StudioKind,
    pub created_at: i64,
    /// Studios that save without a payload omit the key entirely.
    #[serde(default)]
    pub data: D,
}

impl<D> Project<D> {
    /// Create a project stamped with the current wall-clock time.
    pub fn new(name: impl Into<String>, kind: StudioKind, data: D) -> Self {
        Self {
            id: ProjectId::generate(),
            name: name.into(),
            kind,
            created_at: now_millis(),
            data,
        }
    }
}

impl Project<serde_json::Value> {
    /// Interpret the opaque payload as a studio-specific type.
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
