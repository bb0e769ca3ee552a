use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Resolves `name` the way `type` reports it.
///
/// A name containing a separator is checked as given. A bare name is searched
/// in each absolute directory of `search_path`, first match wins.
pub fn find_executable(name: &OsStr, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let candidate = Path::new(name);
    if candidate.components().count() > 1 || candidate.is_absolute() {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    env::split_paths(search_path?)
        .filter(|dir| dir.is_absolute())
        .map(|dir| dir.join(name))
        .find(|path| is_executable(path))
}

/// Same as [`find_executable`] using the process `PATH`.
pub fn which(name: &OsStr) -> Option<PathBuf> {
    let search_path = env::var_os("PATH");
    find_executable(name, search_path.as_deref())
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match path.metadata() {
        Ok(meta) => !meta.is_dir() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
