use crate::consts;
use crate::game::Arena;
use crate::highscore::ScoreFile;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Dimensions of the playing field
    #[serde(default)]
    pub(crate) arena: Arena,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join(consts::DIR_NAME).join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return where the high score should be kept: the file given in the
    /// configuration or, if that is not set, the default high score file.
    /// If `self.files.save_high_score` is `false`, the high score is not kept
    /// anywhere.
    pub(crate) fn score_store(&self) -> ScoreFile {
        if !self.files.save_high_score {
            ScoreFile::Disabled
        } else if let Some(ref p) = self.files.high_score_file {
            ScoreFile::At(p.clone())
        } else {
            ScoreFile::default_location()
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    pub(crate) save_high_score: bool,

    /// File to write log messages to
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawFileConfig {
    high_score_file: Option<String>,
    save_high_score: bool,
    log_file: Option<String>,
}

impl Default for RawFileConfig {
    fn default() -> RawFileConfig {
        RawFileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
        }
    }
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = std::io::Error;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, std::io::Error> {
        Ok(FileConfig {
            high_score_file: value
                .high_score_file
                .map(expanduser::expanduser)
                .transpose()?,
            save_high_score: value.save_high_score,
            log_file: value.log_file.map(expanduser::expanduser).transpose()?,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty() {
        let cfg = toml::from_str::<Config>("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.arena, Arena::default());
        assert!(cfg.files.save_high_score);
    }

    #[test]
    fn full() {
        let src = concat!(
            "[arena]\n",
            "width = 400\n",
            "height = 300\n",
            "block-size = 10\n",
            "step = 5\n",
            "\n",
            "[files]\n",
            "high-score-file = \"/var/games/snake.txt\"\n",
            "save-high-score = true\n",
            "log-file = \"/tmp/gridsnake.log\"\n",
        );
        let cfg = toml::from_str::<Config>(src).unwrap();
        assert_eq!(
            cfg,
            Config {
                arena: Arena {
                    width: 400,
                    height: 300,
                    block_size: 10,
                    step: 5,
                },
                files: FileConfig {
                    high_score_file: Some(PathBuf::from("/var/games/snake.txt")),
                    save_high_score: true,
                    log_file: Some(PathBuf::from("/tmp/gridsnake.log")),
                },
            }
        );
        assert_eq!(
            cfg.score_store(),
            ScoreFile::At(PathBuf::from("/var/games/snake.txt"))
        );
    }

    #[test]
    fn partial_arena() {
        let cfg = toml::from_str::<Config>("[arena]\nstep = 20\n").unwrap();
        assert_eq!(
            cfg.arena,
            Arena {
                step: 20,
                ..Arena::default()
            }
        );
    }

    #[test]
    fn invalid_arena() {
        assert!(toml::from_str::<Config>("[arena]\nblock-size = 0\n").is_err());
        assert!(toml::from_str::<Config>("[arena]\nwidth = 50\n").is_err());
        assert!(toml::from_str::<Config>("[arena]\nstep = 1000\n").is_err());
    }

    #[test]
    fn unknown_key() {
        assert!(toml::from_str::<Config>("[arena]\ncolour = \"green\"\n").is_err());
        assert!(toml::from_str::<Config>("[sound]\nvolume = 11\n").is_err());
    }

    #[test]
    fn saving_disabled() {
        let src = "[files]\nhigh-score-file = \"/tmp/hs.txt\"\nsave-high-score = false\n";
        let cfg = toml::from_str::<Config>(src).unwrap();
        assert_eq!(cfg.score_store(), ScoreFile::Disabled);
    }

    #[test]
    fn default_store() {
        assert_eq!(Config::default().score_store(), ScoreFile::default_location());
    }

    #[test]
    fn load_missing() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_file() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[files]\nsave-high-score = false\n").unwrap();
        let cfg = Config::load(&path, false).unwrap();
        assert!(!cfg.files.save_high_score);
        fs_err::write(&path, "[files\n").unwrap();
        assert!(matches!(
            Config::load(&path, true),
            Err(ConfigError::Parse(_))
        ));
    }
}
