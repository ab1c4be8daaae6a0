use std::env;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("'~' must be followed by a path separator in {0:?}")]
    MalformedTilde(String),

    #[error("cannot resolve home directory: none of HOME, USERPROFILE, or HOMEDRIVE+HOMEPATH are set")]
    MissingHomeEnvironment,

    #[error("cannot resolve current working directory")]
    WorkingDir(#[from] io::Error),
}

/// Expands a leading `~` to the invoking user's home directory.
/// Paths without the marker are returned unchanged.
pub fn expand_user(path: &str) -> Result<PathBuf, PathError> {
    expand_user_with(path, |key| env::var(key).ok())
}

/// Resolution order: HOME, then USERPROFILE, then HOMEDRIVE + HOMEPATH.
fn expand_user_with<F>(path: &str, lookup: F) -> Result<PathBuf, PathError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        return Err(PathError::MalformedTilde(path.to_string()));
    }

    let home = match lookup("HOME").or_else(|| lookup("USERPROFILE")) {
        Some(home) => home,
        None => {
            let hdrive = lookup("HOMEDRIVE").ok_or(PathError::MissingHomeEnvironment)?;
            let hpath = lookup("HOMEPATH").ok_or(PathError::MissingHomeEnvironment)?;
            format!("{}{}", hdrive, hpath)
        }
    };

    let mut expanded = PathBuf::from(home);
    if let Some(rest) = rest.strip_prefix('/') {
        expanded.push(rest);
    }
    Ok(expanded)
}

/// Well-known storage locations, computed once at startup and handed
/// by reference to whatever needs them. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct WellKnownDirs {
    state_dir: PathBuf,
    cache_dir: PathBuf,
    token_dir: PathBuf,
    current_deps_dir: PathBuf,
}

impl WellKnownDirs {
    /// Derives the directories from the environment and the working directory.
    pub fn discover() -> Result<Self, PathError> {
        Ok(Self::from_roots(expand_user("~")?, env::current_dir()?))
    }

    pub fn from_roots(home: PathBuf, cwd: PathBuf) -> Self {
        let state_dir = home.join(".poac");
        let cache_dir = state_dir.join("cache");
        let token_dir = state_dir.join("token");
        let current_deps_dir = cwd.join("deps");
        WellKnownDirs {
            state_dir,
            cache_dir,
            token_dir,
            current_deps_dir,
        }
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn token_dir(&self) -> &Path {
        &self.token_dir
    }

    pub fn current_deps_dir(&self) -> &Path {
        &self.current_deps_dir
    }
}
