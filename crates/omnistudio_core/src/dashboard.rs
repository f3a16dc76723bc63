use crate::store::ProjectStore;
use crate::types::{Project, ProjectId, StudioKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

impl StudioKind {
    /// Product name shown on the dashboard card.
    pub fn title(&self) -> &'static str {
        match self {
            StudioKind::Video => "Video Studio",
            StudioKind::Image => "Image Master",
            StudioKind::Audio => "Sonic Lab",
        }
    }

    /// Accent colour of the kind marker.
    pub fn accent(&self) -> &'static str {
        match self {
            StudioKind::Video => "purple",
            StudioKind::Image => "blue",
            StudioKind::Audio => "green",
        }
    }
}

/// A "new project" tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryCard {
    pub kind: StudioKind,
    pub title: &'static str,
    pub accent: &'static str,
}

/// One entry of the recent projects grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: ProjectId,
    pub name: String,
    pub kind: StudioKind,
    pub accent: &'static str,
    pub created_at: i64,
    pub date_label: String,
}

impl ProjectCard {
    pub fn from_project<D>(project: &Project<D>) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            kind: project.kind,
            accent: project.kind.accent(),
            created_at: project.created_at,
            date_label: date_label(project.created_at),
        }
    }
}

/// Everything the dashboard screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub entries: Vec<EntryCard>,
    pub recent: Vec<ProjectCard>,
}

impl Dashboard {
    pub fn new<S, D>(store: &ProjectStore<S, D>) -> Self {
        Self {
            entries: entry_cards(),
            recent: store
                .sorted_view()
                .into_iter()
                .map(ProjectCard::from_project)
                .collect(),
        }
    }

    /// The recent projects section is hidden when there is nothing to show.
    pub fn has_recent(&self) -> bool {
        !self.recent.is_empty()
    }
}

pub fn entry_cards() -> Vec<EntryCard> {
    StudioKind::ALL
        .iter()
        .map(|&kind| EntryCard {
            kind,
            title: kind.title(),
            accent: kind.accent(),
        })
        .collect()
}

/// `YYYY-MM-DD` in UTC. Out-of-range timestamps render as `"-"`.
pub fn date_label(created_at: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(created_at) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}
