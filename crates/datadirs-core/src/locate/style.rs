//! Path conventions of the two platform families.
//!
//! The engine never consults `cfg!` directly; every component takes a
//! `PathStyle` so both conventions behave the same on any host.

use serde::{Deserialize, Serialize};

/// Path conventions: separator, list delimiter, escaping and absoluteness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `/` separated paths, `:` separated lists, `\` escapes.
    Posix,
    /// `\` separated paths, `;` separated lists, no escapes.
    Windows,
}

impl PathStyle {
    /// The style of the platform this binary was compiled for.
    pub const fn native() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Posix }
    }

    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Delimiter between entries of a directory list (like `PATH`).
    pub const fn list_delimiter(self) -> char {
        match self {
            Self::Posix => ':',
            Self::Windows => ';',
        }
    }

    /// Whether a backslash escapes the character that follows it.
    pub const fn has_escapes(self) -> bool {
        matches!(self, Self::Posix)
    }

    /// Textual absoluteness check.
    ///
    /// Windows accepts a drive prefix (`C:\` or `C:/`) or a UNC prefix (`\\`).
    pub fn is_absolute(self, path: &str) -> bool {
        match self {
            Self::Posix => path.starts_with('/'),
            Self::Windows => {
                let bytes = path.as_bytes();
                path.starts_with("\\\\")
                    || (bytes.len() >= 3
                        && bytes[0].is_ascii_alphabetic()
                        && bytes[1] == b':'
                        && (bytes[2] == b'\\' || bytes[2] == b'/'))
            }
        }
    }

    /// Whether any segment of `path` is a parent-directory reference.
    pub fn has_parent_segment(self, path: &str) -> bool {
        let is_sep = |c: char| c == '/' || (self == Self::Windows && c == '\\');
        path.split(is_sep).any(|segment| segment == "..")
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_conventions() {
        let style = PathStyle::Posix;
        assert_eq!(style.separator(), '/');
        assert_eq!(style.list_delimiter(), ':');
        assert!(style.has_escapes());
        assert!(style.is_absolute("/usr/share"));
        assert!(!style.is_absolute("usr/share"));
        assert!(!style.is_absolute("./"));
    }

    #[test]
    fn windows_absolute_forms() {
        let style = PathStyle::Windows;
        assert!(style.is_absolute("C:\\Games\\"));
        assert!(style.is_absolute("d:/games/"));
        assert!(style.is_absolute("\\\\server\\share\\"));
        assert!(!style.is_absolute("Games\\"));
        assert!(!style.is_absolute("C:Games"));
        assert!(!style.has_escapes());
    }

    #[test]
    fn parent_segments_are_detected_per_segment() {
        assert!(PathStyle::Posix.has_parent_segment("/a/../etc/"));
        assert!(PathStyle::Posix.has_parent_segment("/a/.."));
        assert!(!PathStyle::Posix.has_parent_segment("/a/b..c/"));
        assert!(!PathStyle::Posix.has_parent_segment("/a/.hidden/"));
        assert!(PathStyle::Windows.has_parent_segment("C:\\a\\..\\b\\"));
        assert!(PathStyle::Windows.has_parent_segment("C:/a/../b/"));
    }
}
