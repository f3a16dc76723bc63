use crate::config::ShellConfig;
use anyhow::Context;
use omnistudio_core::preferences::{self, Theme};
use omnistudio_core::{DirStore, NavigationState, ProjectStore};
use std::sync::Mutex;

pub struct AppState {
    pub navigation: Mutex<NavigationState>,
    pub projects: Mutex<ProjectStore<DirStore>>,
    pub preferences: Mutex<DirStore>,
    pub theme: Mutex<Theme>,
}

impl AppState {
    /// Open the data directory and read the persisted state once.
    pub fn open(config: &ShellConfig) -> anyhow::Result<Self> {
        let storage = DirStore::open(&config.data_dir).with_context(|| {
            format!("failed to open data dir {}", config.data_dir.display())
        })?;
        let projects: ProjectStore<DirStore> = ProjectStore::load(storage.clone());
        let theme = preferences::load_theme(&storage);
        tracing::info!(
            "loaded {} project(s) from {}, theme {}",
            projects.len(),
            storage.root().display(),
            theme.as_str()
        );
        Ok(Self {
            navigation: Mutex::new(NavigationState::new()),
            projects: Mutex::new(projects),
            preferences: Mutex::new(storage),
            theme: Mutex::new(theme),
        })
    }
}
