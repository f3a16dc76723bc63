use crate::error::Result;
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";
pub const TOUR_SEEN_KEY: &str = "omnistudio_has_seen_tour_v4";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Stored theme. Only an exact `"light"` selects the light theme.
pub fn load_theme<S: KeyValueStore>(storage: &S) -> Theme {
    match storage.get(THEME_KEY) {
        Ok(Some(v)) if v == "light" => Theme::Light,
        Ok(_) => Theme::Dark,
        Err(e) => {
            tracing::warn!("failed to read {}: {}", THEME_KEY, e);
            Theme::Dark
        }
    }
}

pub fn save_theme<S: KeyValueStore>(storage: &mut S, theme: Theme) -> Result<()> {
    storage.set(THEME_KEY, theme.as_str())
}

/// Flip `current` and persist the result.
pub fn toggle_theme<S: KeyValueStore>(storage: &mut S, current: Theme) -> Result<Theme> {
    let next = current.toggled();
    save_theme(storage, next)?;
    Ok(next)
}

/// Whether the first-run tour should be shown. The first call that answers
/// `true` also records the flag, so later calls answer `false`.
pub fn take_first_run_tour<S: KeyValueStore>(storage: &mut S) -> Result<bool> {
    if storage.contains(TOUR_SEEN_KEY)? {
        return Ok(false);
    }
    storage.set(TOUR_SEEN_KEY, "true")?;
    Ok(true)
}
