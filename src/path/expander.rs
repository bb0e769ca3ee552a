use crate::error::ShellError;
use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Substitutes the home directory for an operand that is exactly `~`.
    /// Anything else, including `~/x`, is returned untouched.
    pub fn expand(&self, path: &OsStr) -> Result<PathBuf, ShellError> {
        if self.is_home_path(path) {
            self.get_home_dir()
        } else {
            Ok(PathBuf::from(path))
        }
    }

    pub fn is_home_path(&self, path: &OsStr) -> bool {
        path == "~"
    }

    /// `HOME` verbatim, falling back to the platform lookup when unset.
    pub fn get_home_dir(&self) -> Result<PathBuf, ShellError> {
        match env::var_os("HOME") {
            Some(home) => Ok(PathBuf::from(home)),
            None => dirs::home_dir().ok_or(ShellError::HomeDirNotFound),
        }
    }
}
