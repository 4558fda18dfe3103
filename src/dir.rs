//! The [`Dir`] path value returned by resolution.
//!
//! A `Dir` is a plain path string. Building and splitting it is purely
//! lexical; only [`Dir::exists`], [`Dir::try_exists`] and [`Dir::create`]
//! touch the filesystem.

use std::fmt;
use std::fs;
use std::io;
use std::path::{MAIN_SEPARATOR, Path};

use serde::{Deserialize, Serialize};

/// Separator between entries of a search-path variable such as `XDG_DATA_DIRS`.
pub const LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Permission bits for directories created by [`Dir::create`].
#[cfg(unix)]
const CREATE_MODE: u32 = 0o755;

/// A directory path.
///
/// The empty `Dir` means "could not be resolved in this environment".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dir(String);

impl Dir {
    /// Wraps `path` without modifying it.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path exactly as constructed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Returns `true` if the path is empty, i.e. unresolvable.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns a new `Dir` with `segment` joined as a trailing component.
    ///
    /// The result is lexically cleaned: repeated separators collapse, `.`
    /// components drop out and `..` consumes the preceding component. A
    /// `segment` starting with a separator is still appended, never treated
    /// as a new root.
    #[must_use]
    pub fn append(&self, segment: &str) -> Self {
        Self(join(&[&self.0, segment]))
    }

    /// Splits the path on the separator.
    ///
    /// A leading and a trailing empty segment are discarded; empty segments
    /// in the middle (from a doubled separator) are kept.
    pub fn split(&self) -> Vec<&str> {
        let mut parts: Vec<&str> = self.0.split(MAIN_SEPARATOR).collect();
        if parts.first().is_some_and(|part| part.is_empty()) {
            parts.remove(0);
        }
        if parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
        parts
    }

    /// Returns `true` unless the path definitely does not exist.
    ///
    /// Errors other than "not found" (for example a permission error on a
    /// parent directory) count as existing. Use [`Dir::try_exists`] to tell
    /// those apart.
    pub fn exists(&self) -> bool {
        !matches!(self.try_exists(), Ok(false))
    }

    /// Checks whether the path denotes any filesystem entry.
    ///
    /// Returns `Ok(false)` only when the lookup reports "not found"; other
    /// failures are returned as errors.
    pub fn try_exists(&self) -> io::Result<bool> {
        match fs::metadata(&self.0) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Creates the directory and any missing parents with mode `0755`.
    ///
    /// Succeeds if the directory already exists. The underlying I/O error is
    /// returned unchanged on failure.
    pub fn create(&self) -> io::Result<()> {
        if self.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "cannot create an empty directory path",
            ));
        }

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(CREATE_MODE);
        }
        builder.create(&self.0)
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for Dir {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<str> for Dir {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Dir {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Dir {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl PartialEq<str> for Dir {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Dir {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Joins path elements with the separator and cleans the result.
///
/// Empty elements are ignored; if every element is empty the result is the
/// empty string.
pub(crate) fn join(elements: &[&str]) -> String {
    let parts: Vec<&str> = elements.iter().copied().filter(|e| !e.is_empty()).collect();
    if parts.is_empty() {
        return String::new();
    }
    clean(&parts.join(&MAIN_SEPARATOR.to_string()))
}

/// Lexically normalizes a non-empty path.
fn clean(path: &str) -> String {
    let rooted = path.starts_with(MAIN_SEPARATOR);
    let mut out: Vec<&str> = Vec::new();

    for component in path.split(MAIN_SEPARATOR) {
        match component {
            "" | "." => {}
            ".." => match out.last() {
                Some(&last) if last != ".." => {
                    out.pop();
                }
                // ".." at the root stays at the root
                _ if rooted => {}
                _ => out.push(".."),
            },
            _ => out.push(component),
        }
    }

    let body = out.join(&MAIN_SEPARATOR.to_string());
    match (rooted, body.is_empty()) {
        (true, _) => format!("{MAIN_SEPARATOR}{body}"),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
