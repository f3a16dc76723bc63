use crate::types::{Project, Studio, StudioKind};
use serde::Serialize;

/// Which screen is shown, and with what project.
///
/// `current_project` is only ever set while an editor is active: every path
/// back to [`Studio::Home`] drops it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState<D = serde_json::Value> {
    active: Studio,
    current_project: Option<Project<D>>,
}

/// Input to [`NavigationState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent<D = serde_json::Value> {
    GoHome,
    /// Open an editor, either blank (`project: None`) or on an existing project.
    StartProject {
        kind: StudioKind,
        project: Option<Project<D>>,
    },
}

impl<D> NavigationState<D> {
    /// Dashboard, nothing loaded.
    pub fn new() -> Self {
        Self {
            active: Studio::Home,
            current_project: None,
        }
    }

    pub fn active(&self) -> Studio {
        self.active
    }

    pub fn current_project(&self) -> Option<&Project<D>> {
        self.current_project.as_ref()
    }

    /// Pure transition: old state plus event gives the new state.
    pub fn apply(self, event: NavEvent<D>) -> Self {
        match event {
            NavEvent::GoHome => Self::new(),
            NavEvent::StartProject { kind, project } => Self {
                active: Studio::from(kind),
                current_project: project,
            },
        }
    }

    pub fn go_home(&mut self) {
        tracing::debug!("navigate {:?} -> home", self.active);
        self.transition(NavEvent::GoHome);
    }

    /// Open the `kind` editor. The project, if any, is passed through as is.
    pub fn start_project(&mut self, kind: StudioKind, project: Option<Project<D>>) {
        tracing::debug!(
            "navigate {:?} -> {} (existing project: {})",
            self.active,
            kind,
            project.is_some()
        );
        self.transition(NavEvent::StartProject { kind, project });
    }

    /// Reopen a saved project in the editor its kind belongs to.
    pub fn open_project(&mut self, project: Project<D>) {
        let kind = project.kind;
        self.start_project(kind, Some(project));
    }

    /// Shortcut listing for the active screen.
    pub fn shortcuts(&self) -> Vec<Shortcut> {
        shortcuts(self.active)
    }

    fn transition(&mut self, event: NavEvent<D>) {
        let old = std::mem::replace(self, Self::new());
        *self = old.apply(event);
    }
}

impl<D> Default for NavigationState<D> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Shortcuts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub key: &'static str,
    pub action: &'static str,
}

const fn sc(key: &'static str, action: &'static str) -> Shortcut {
    Shortcut { key, action }
}

const TOGGLE_HELP: Shortcut = sc("?", "Toggle Help");

const VIDEO_SHORTCUTS: &[Shortcut] = &[
    sc("Space", "Play / Pause"),
    sc("← / →", "Seek Timeline"),
    sc("Ctrl+S", "Save Project"),
];

const IMAGE_SHORTCUTS: &[Shortcut] = &[
    sc("Ctrl+Z", "Undo"),
    sc("Ctrl+Y", "Redo"),
    sc("B", "Brush Tool"),
    sc("E", "Eraser Tool"),
    sc("Ctrl+S", "Save Project"),
];

const AUDIO_SHORTCUTS: &[Shortcut] = &[
    sc("Space", "Play / Pause"),
    sc("R", "Start/Stop Recording"),
    sc("Ctrl+S", "Save Project"),
];

/// Keyboard shortcuts shown in the help modal for `studio`, help toggle first.
pub fn shortcuts(studio: Studio) -> Vec<Shortcut> {
    let specific: &[Shortcut] = match studio {
        Studio::Home => &[],
        Studio::Video => VIDEO_SHORTCUTS,
        Studio::Image => IMAGE_SHORTCUTS,
        Studio::Audio => AUDIO_SHORTCUTS,
    };
    let mut list = Vec::with_capacity(specific.len() + 1);
    list.push(TOGGLE_HELP);
    list.extend_from_slice(specific);
    list
}
