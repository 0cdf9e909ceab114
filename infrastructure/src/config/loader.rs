//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "pir-direction";
const PROJECT_FILES: [&str; 2] = ["pir-direction.toml", ".pir-direction.toml"];
const ENV_PREFIX: &str = "PIR_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PIR_`-prefixed environment variables (`PIR_DIALOGUE__MAX_QUESTIONS=10`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./pir-direction.toml` or `./.pir-direction.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/pir-direction/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
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

    /// Describe the config file locations being used
    pub fn config_sources(explicit: Option<&Path>) -> Vec<(String, PathBuf, bool)> {
        let mut sources = Vec::new();

        if let Some(path) = explicit {
            sources.push(("Explicit".to_string(), path.to_path_buf(), path.exists()));
        }

        match Self::project_config_path() {
            Some(path) => sources.push(("Project".to_string(), path, true)),
            None => sources.push((
                "Project".to_string(),
                PathBuf::from(PROJECT_FILES[0]),
                false,
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let exists = path.exists();
            sources.push(("Global".to_string(), path, exists));
        }

        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.dialogue.max_questions, 15);
        assert!(config.reasoning_log.enabled);
    }

    #[test]
    fn test_global_config_path_mentions_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("pir-direction"));
        }
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "pir-direction.toml",
                r#"
[dialogue]
max_questions = 7
"#,
            )?;

            let config = ConfigLoader::load(None).expect("config should load");
            assert_eq!(config.dialogue.max_questions, 7);
            assert_eq!(config.dialogue.max_retries, 3);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("pir-direction.toml", "[dialogue]\nmax_retries = 4\n")?;
            jail.create_file("custom.toml", "[dialogue]\nmax_retries = 9\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml")))
                .expect("config should load");
            assert_eq!(config.dialogue.max_retries, 9);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("pir-direction.toml", "[dialogue]\nmax_questions = 7\n")?;
            jail.set_env("PIR_DIALOGUE__MAX_QUESTIONS", "12");
            jail.set_env("PIR_REASONING_LOG__ENABLED", "false");

            let config = ConfigLoader::load(None).expect("config should load");
            assert_eq!(config.dialogue.max_questions, 12);
            assert!(!config.reasoning_log.enabled);
            Ok(())
        });
    }

    #[test]
    fn test_config_sources_report_missing_project_file() {
        Jail::expect_with(|_jail| {
            let sources = ConfigLoader::config_sources(Some(Path::new("missing.toml")));
            assert_eq!(sources[0].0, "Explicit");
            assert!(!sources[0].2);
            assert_eq!(sources[1].0, "Project");
            assert!(!sources[1].2);
            Ok(())
        });
    }
}
