//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "couple-quiz";
const PROJECT_FILES: [&str; 2] = ["couple-quiz.toml", ".couple-quiz.toml"];

/// Errors raised while merging configuration sources
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// One place configuration may be read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub path: PathBuf,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./couple-quiz.toml` or `./.couple-quiz.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/couple-quiz/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Merging global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            debug!("Merging project config {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // Explicit path has the highest priority for files
        if let Some(path) = config_path {
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/couple-quiz/config.toml if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Every source consulted, in priority order, for `--show-config`
    pub fn sources(config_path: Option<&PathBuf>) -> Vec<ConfigSource> {
        let mut sources = Vec::new();

        if let Some(path) = config_path {
            sources.push(ConfigSource {
                label: "Explicit",
                found: path.exists(),
                path: path.clone(),
            });
        }

        let project = Self::project_config_path();
        sources.push(ConfigSource {
            label: "Project",
            found: project.is_some(),
            path: project.unwrap_or_else(|| PathBuf::from(PROJECT_FILES[0])),
        });

        if let Some(path) = Self::global_config_path() {
            sources.push(ConfigSource {
                label: "Global",
                found: path.exists(),
                path,
            });
        }

        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::GameVariant;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.game.variant, "self-judged");
        assert_eq!(config.game.transition_delay_ms, 1500);
        assert_eq!(config.questions.source, "questions.json");
    }

    #[test]
    fn test_global_config_path_names_app_dir() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("couple-quiz"));
        }
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[game]
variant = "matching"
transition_delay_ms = 500

[questions]
source = "https://example.com/questions.json"
"#
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        let (game, issues) = config.game.to_game_config();
        assert!(issues.is_empty());
        assert_eq!(game.variant, GameVariant::Matching);
        assert_eq!(game.transition_delay.as_millis(), 500);
        assert_eq!(config.questions.source, "https://example.com/questions.json");
        // Untouched sections keep their defaults
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[game\nvariant = ").unwrap();
        assert!(ConfigLoader::load(Some(&path)).is_err());
    }

    #[test]
    fn test_sources_lists_explicit_first() {
        let path = PathBuf::from("/nonexistent/couple-quiz.toml");
        let sources = ConfigLoader::sources(Some(&path));
        assert_eq!(sources[0].label, "Explicit");
        assert!(!sources[0].found);
    }
}
