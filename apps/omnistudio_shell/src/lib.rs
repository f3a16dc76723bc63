pub mod config;
mod state;

pub use config::ShellConfig;
pub use state::AppState;

use omnistudio_core::dashboard::Dashboard;
use omnistudio_core::preferences::{self, Theme};
use omnistudio_core::{CoreError, NavigationState, Project, ProjectId, Shortcut, StudioKind};

pub fn list_projects(state: &AppState) -> Result<Vec<Project>, String> {
    tracing::info!("list_projects called");
    let store = state.projects.lock().map_err(|e| e.to_string())?;
    Ok(store.sorted_view().into_iter().cloned().collect())
}

pub fn dashboard(state: &AppState) -> Result<Dashboard, String> {
    tracing::info!("dashboard called");
    let store = state.projects.lock().map_err(|e| e.to_string())?;
    Ok(Dashboard::new(&*store))
}

pub fn delete_project(id: String, state: &AppState) -> Result<(), String> {
    tracing::info!("delete_project called: {}", id);
    let mut store = state.projects.lock().map_err(|e| e.to_string())?;
    store.delete(&ProjectId::new(id)).map_err(|e| e.to_string())
}

/// Persist a studio save. `project_json` uses the stored record format.
/// Returns the saved project's id.
pub fn save_project(project_json: String, state: &AppState) -> Result<String, String> {
    let project: Project = serde_json::from_str(&project_json).map_err(|e| e.to_string())?;
    tracing::info!("save_project called: {} ({})", project.id, project.kind);
    let id = project.id.to_string();
    let mut store = state.projects.lock().map_err(|e| e.to_string())?;
    store.upsert(project).map_err(|e| e.to_string())?;
    Ok(id)
}

pub fn new_project(kind: StudioKind, state: &AppState) -> Result<NavigationState, String> {
    tracing::info!("new_project called: {}", kind);
    let mut nav = state.navigation.lock().map_err(|e| e.to_string())?;
    nav.start_project(kind, None);
    Ok(nav.clone())
}

pub fn open_project(id: String, state: &AppState) -> Result<NavigationState, String> {
    tracing::info!("open_project called: {}", id);
    let project = {
        let store = state.projects.lock().map_err(|e| e.to_string())?;
        store
            .get(&ProjectId::new(id.as_str()))
            .cloned()
            .ok_or_else(|| CoreError::ProjectNotFound(id).to_string())?
    };
    let mut nav = state.navigation.lock().map_err(|e| e.to_string())?;
    nav.open_project(project);
    Ok(nav.clone())
}

pub fn go_home(state: &AppState) -> Result<NavigationState, String> {
    tracing::info!("go_home called");
    let mut nav = state.navigation.lock().map_err(|e| e.to_string())?;
    nav.go_home();
    Ok(nav.clone())
}

pub fn current_view(state: &AppState) -> Result<NavigationState, String> {
    let nav = state.navigation.lock().map_err(|e| e.to_string())?;
    Ok(nav.clone())
}

pub fn shortcuts(state: &AppState) -> Result<Vec<Shortcut>, String> {
    let nav = state.navigation.lock().map_err(|e| e.to_string())?;
    Ok(nav.shortcuts())
}

pub fn get_theme(state: &AppState) -> Result<Theme, String> {
    let theme = state.theme.lock().map_err(|e| e.to_string())?;
    Ok(*theme)
}

pub fn toggle_theme(state: &AppState) -> Result<Theme, String> {
    let mut theme = state.theme.lock().map_err(|e| e.to_string())?;
    let mut storage = state.preferences.lock().map_err(|e| e.to_string())?;
    *theme = preferences::toggle_theme(&mut *storage, *theme).map_err(|e| e.to_string())?;
    tracing::info!("theme switched to {}", theme.as_str());
    Ok(*theme)
}

/// `true` exactly once per data directory: the first time the shell asks.
pub fn take_tour(state: &AppState) -> Result<bool, String> {
    let mut storage = state.preferences.lock().map_err(|e| e.to_string())?;
    preferences::take_first_run_tour(&mut *storage).map_err(|e| e.to_string())
}

pub fn init_tracing(config: &ShellConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();
}

/// Set up logging and open the application state.
pub fn run(config: ShellConfig) -> anyhow::Result<AppState> {
    init_tracing(&config);
    let state = AppState::open(&config)?;
    tracing::info!("OmniStudio shell ready");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnistudio_core::store::PROJECTS_KEY;
    use omnistudio_core::{KeyValueStore, Studio};
    use serde_json::json;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> AppState {
        AppState::open(&ShellConfig::new(dir.path())).unwrap()
    }

    fn seed(dir: &TempDir, raw: &str) {
        let mut storage = omnistudio_core::DirStore::open(dir.path()).unwrap();
        storage.set(PROJECTS_KEY, raw).unwrap();
    }

    fn stored_projects(dir: &TempDir) -> Option<String> {
        let storage = omnistudio_core::DirStore::open(dir.path()).unwrap();
        storage.get(PROJECTS_KEY).unwrap()
    }

    fn two_projects() -> String {
        json!([
            { "id": "a", "name": "Clip", "type": "video", "createdAt": 100, "data": {} },
            {
                "id": "b",
                "name": "Poster",
                "type": "image",
                "createdAt": 200,
                "data": { "layers": 2 }
            }
        ])
        .to_string()
    }

    #[test]
    fn fresh_data_dir_starts_empty_and_dark() {
        let dir = TempDir::new().unwrap();
        let state = open(&dir);
        assert!(list_projects(&state).unwrap().is_empty());
        assert_eq!(get_theme(&state).unwrap(), Theme::Dark);
        assert_eq!(current_view(&state).unwrap().active(), Studio::Home);
    }

    #[test]
    fn corrupt_projects_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        seed(&dir, "not json");
        let state = open(&dir);
        assert!(list_projects(&state).unwrap().is_empty());
        assert!(!dashboard(&state).unwrap().has_recent());
    }

    #[test]
    fn list_is_newest_first() {
        let dir = TempDir::new().unwrap();
        seed(&dir, &two_projects());
        let state = open(&dir);
        let ids: Vec<String> = list_projects(&state)
            .unwrap()
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn delete_survives_restart() {
        let dir = TempDir::new().unwrap();
        seed(&dir, &two_projects());
        let state = open(&dir);
        delete_project("a".to_string(), &state).unwrap();
        delete_project("a".to_string(), &state).unwrap();
        drop(state);

        let state = open(&dir);
        let projects = list_projects(&state).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Poster");
    }

    #[test]
    fn open_then_home_leaves_storage_alone() {
        let dir = TempDir::new().unwrap();
        seed(&dir, &two_projects());
        let raw_before = stored_projects(&dir);
        let state = open(&dir);
        let before = list_projects(&state).unwrap();

        let view = open_project("b".to_string(), &state).unwrap();
        assert_eq!(view.active(), Studio::Image);
        assert_eq!(view.current_project().map(|p| p.name.as_str()), Some("Poster"));
        assert_eq!(shortcuts(&state).unwrap().len(), 6);

        let view = go_home(&state).unwrap();
        assert_eq!(view.active(), Studio::Home);
        assert!(view.current_project().is_none());
        assert_eq!(list_projects(&state).unwrap(), before);
        assert_eq!(stored_projects(&dir), raw_before);
        drop(state);

        let state = open(&dir);
        let poster = list_projects(&state)
            .unwrap()
            .into_iter()
            .find(|p| p.id.as_str() == "b")
            .unwrap();
        assert_eq!(poster.name, "Poster");
        assert_eq!(poster.kind, StudioKind::Image);
        assert_eq!(poster.created_at, 200);
        assert_eq!(poster.data, json!({ "layers": 2 }));
    }

    #[test]
    fn open_unknown_project_keeps_view() {
        let dir = TempDir::new().unwrap();
        let state = open(&dir);
        new_project(StudioKind::Audio, &state).unwrap();

        let err = open_project("missing".to_string(), &state).unwrap_err();
        assert!(err.contains("missing"));
        assert_eq!(current_view(&state).unwrap().active(), Studio::Audio);
    }

    #[test]
    fn new_project_has_no_payload() {
        let dir = TempDir::new().unwrap();
        let state = open(&dir);
        let view = new_project(StudioKind::Video, &state).unwrap();
        assert_eq!(view.active(), Studio::Video);
        assert!(view.current_project().is_none());
    }

    #[test]
    fn save_project_upserts() {
        let dir = TempDir::new().unwrap();
        let state = open(&dir);
        let raw = json!({
            "id": "s1",
            "name": "Demo",
            "type": "audio",
            "createdAt": 5,
            "data": { "volume": 1 }
        });
        assert_eq!(save_project(raw.to_string(), &state).unwrap(), "s1");

        let renamed = json!({
            "id": "s1",
            "name": "Demo v2",
            "type": "audio",
            "createdAt": 5,
            "data": null
        });
        save_project(renamed.to_string(), &state).unwrap();
        drop(state);

        let state = open(&dir);
        let projects = list_projects(&state).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Demo v2");
        assert!(save_project("{".to_string(), &state).is_err());
    }

    #[test]
    fn theme_toggle_persists() {
        let dir = TempDir::new().unwrap();
        let state = open(&dir);
        assert_eq!(toggle_theme(&state).unwrap(), Theme::Light);
        drop(state);

        let state = open(&dir);
        assert_eq!(get_theme(&state).unwrap(), Theme::Light);
    }

    #[test]
    fn tour_offered_once_per_data_dir() {
        let dir = TempDir::new().unwrap();
        let state = open(&dir);
        assert!(take_tour(&state).unwrap());
        drop(state);

        let state = open(&dir);
        assert!(!take_tour(&state).unwrap());
    }
}
