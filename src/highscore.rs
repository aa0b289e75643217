use crate::consts;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// The best score achieved so far.  It can only ever go up.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) struct HighScore(u32);

impl HighScore {
    pub(crate) fn new(score: u32) -> HighScore {
        HighScore(score)
    }

    pub(crate) fn get(self) -> u32 {
        self.0
    }

    /// Record the final score of a game.  Returns `true` if it beat the
    /// previous high score, in which case the high score is updated.
    pub(crate) fn record(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

/// Durable storage for the high score
pub(crate) trait ScoreStore {
    /// Load the stored high score.  If nothing has been stored yet, this
    /// returns zero.
    fn load(&self) -> Result<u32, LoadError>;

    /// Replace the stored high score with `score`
    fn save(&mut self, score: u32) -> Result<(), SaveError>;
}

/// A high score kept in a text file as a single decimal integer
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum ScoreFile {
    /// The score is stored at the given path.
    At(PathBuf),
    /// The default path could not be determined; every load & save fails.
    Unknown,
    /// Persistence has been turned off; nothing is read or written.
    Disabled,
}

impl ScoreFile {
    /// Return a `ScoreFile` at the default location inside the local data
    /// directory
    pub(crate) fn default_location() -> ScoreFile {
        dirs::data_local_dir().map_or(ScoreFile::Unknown, |p| {
            ScoreFile::At(p.join(consts::DIR_NAME).join(consts::HIGH_SCORE_FILE_NAME))
        })
    }
}

impl ScoreStore for ScoreFile {
    fn load(&self) -> Result<u32, LoadError> {
        let path = match *self {
            ScoreFile::At(ref path) => path,
            ScoreFile::Unknown => return Err(LoadError::no_path()),
            ScoreFile::Disabled => return Ok(0),
        };
        let src = match fs_err::read_to_string(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        src.trim().parse::<u32>().map_err(LoadError::parse)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        let path = match *self {
            ScoreFile::At(ref path) => path,
            ScoreFile::Unknown => return Err(SaveError::no_path()),
            ScoreFile::Disabled => return Ok(()),
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        fs_err::write(path, format!("{score}\n")).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    pub(crate) fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    pub(crate) fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    pub(crate) fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    pub(crate) fn no_path() -> Self {
        LoadError(LoadErrorSource::NoPath)
    }

    pub(crate) fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    pub(crate) fn parse(e: ParseIntError) -> Self {
        LoadError(LoadErrorSource::Parse(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("high score file does not contain a valid score")]
    Parse(#[source] ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use tempfile::tempdir;

    #[test]
    fn record_only_goes_up() {
        let mut hs = HighScore::default();
        assert!(hs.record(3));
        assert_eq!(hs.get(), 3);
        assert!(!hs.record(3));
        assert!(!hs.record(1));
        assert_eq!(hs.get(), 3);
        assert!(hs.record(10));
        assert_eq!(hs, HighScore::new(10));
    }

    #[test]
    fn load_missing() {
        let tmpdir = tempdir().unwrap();
        let store = ScoreFile::At(tmpdir.path().join("highscore.txt"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("nested").join("dir").join("highscore.txt");
        let mut store = ScoreFile::At(path.clone());
        store.save(42).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "42\n");
        assert_eq!(store.load().unwrap(), 42);
        store.save(7).unwrap();
        assert_eq!(store.load().unwrap(), 7);
    }

    #[test]
    fn load_tolerates_whitespace() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore.txt");
        fs_err::write(&path, "  17 \r\n").unwrap();
        assert_eq!(ScoreFile::At(path).load().unwrap(), 17);
    }

    #[test]
    fn load_corrupt() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore.txt");
        fs_err::write(&path, "lots\n").unwrap();
        let e = ScoreFile::At(path).load().unwrap_err();
        assert_eq!(e.to_string(), "Failed to read high score from disk");
        assert_eq!(
            e.source().unwrap().to_string(),
            "high score file does not contain a valid score"
        );
    }

    #[test]
    fn load_negative_is_corrupt() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore.txt");
        fs_err::write(&path, "-5").unwrap();
        assert!(ScoreFile::At(path).load().is_err());
    }

    #[test]
    fn load_directory_is_read_error() {
        let tmpdir = tempdir().unwrap();
        let e = ScoreFile::At(tmpdir.path().to_path_buf())
            .load()
            .unwrap_err();
        assert_eq!(
            e.source().unwrap().to_string(),
            "failed to read high score file"
        );
    }

    #[test]
    fn disabled() {
        let mut store = ScoreFile::Disabled;
        assert_eq!(store.load().unwrap(), 0);
        store.save(99).unwrap();
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn unknown_path() {
        let mut store = ScoreFile::Unknown;
        let e = store.load().unwrap_err();
        assert_eq!(
            e.source().unwrap().to_string(),
            "failed to determine path to local data directory"
        );
        let e = store.save(1).unwrap_err();
        assert_eq!(e.to_string(), "Failed to save high score to disk");
    }
}
