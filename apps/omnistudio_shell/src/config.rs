use std::path::PathBuf;

/// Where the shell keeps its key-value data and how loud it logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub data_dir: PathBuf,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl ShellConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            log_filter: "info".to_string(),
        }
    }

    /// `$OMNISTUDIO_DATA_DIR`, else `~/.local/share/omnistudio`, else a temp dir.
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os("OMNISTUDIO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        Self::new(data_dir)
    }
}

fn default_data_dir() -> PathBuf {
    std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(".local").join("share"))
        .unwrap_or_else(|_| std::env::temp_dir())
        .join("omnistudio")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_info() {
        let config = ShellConfig::new("/data/omni");
        assert_eq!(config.data_dir, PathBuf::from("/data/omni"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn default_dir_ends_with_app_name() {
        assert!(default_data_dir().ends_with("omnistudio"));
    }
}
