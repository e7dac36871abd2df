//! Read/write permission resolution over the merged candidate list.
//!
//! One strict left-to-right pass. The first candidate that exists and is
//! writable, or that does not exist but can be created while no write
//! directory has been chosen yet, becomes the write directory. Everything
//! after it is only checked for existence. Consecutive duplicates of the
//! previous survivor are dropped; non-consecutive duplicates are kept
//! because search order is first-match-wins and it is not obvious which
//! instance to purge.

use tracing::warn;

use crate::ports::Filesystem;

use super::dir_list::DataDir;
use super::style::PathStyle;

/// Surviving candidates in priority order, plus the write directory if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub dirs: Vec<DataDir>,
    /// Index into `dirs` of the only writable entry.
    pub write_index: Option<usize>,
}

impl Resolution {
    pub fn write_dir(&self) -> Option<&DataDir> {
        self.write_index.and_then(|i| self.dirs.get(i))
    }
}

/// Probe every candidate once and pick the write directory.
///
/// Candidates that are not absolute or that contain a `..` segment are
/// dropped before any filesystem access.
pub fn resolve_permissions(
    candidates: Vec<DataDir>,
    style: PathStyle,
    fs: &dyn Filesystem,
) -> Resolution {
    let mut dirs: Vec<DataDir> = Vec::with_capacity(candidates.len());
    let mut write_index = None;
    let mut previous = String::new();

    for mut dir in candidates {
        if !is_safe(&dir, style) {
            warn!(
                "Ignoring data directory {}: use absolute paths without '..'",
                dir.path()
            );
            continue;
        }
        if dir.path() == previous {
            continue;
        }
        if determine_permissions(&mut dir, write_index.is_some(), fs) {
            if dir.is_writable() {
                write_index = Some(dirs.len());
            }
            previous.clear();
            previous.push_str(dir.path());
            dirs.push(dir);
        }
    }

    Resolution { dirs, write_index }
}

fn is_safe(dir: &DataDir, style: PathStyle) -> bool {
    style.is_absolute(dir.path()) && !style.has_parent_segment(dir.path())
}

/// Whether `dir` is usable; marks it writable when it becomes the write dir.
///
/// Existing directories are always usable. Missing ones are only created
/// while no write directory exists yet: read-only locations are never
/// auto-created.
fn determine_permissions(dir: &mut DataDir, have_write_dir: bool, fs: &dyn Filesystem) -> bool {
    let path = dir.as_path();
    if fs.dir_exists(path) {
        if !have_write_dir && fs.dir_is_writable(path) {
            dir.mark_writable();
        }
        true
    } else if !have_write_dir && fs.create_dir(path) {
        // Freshly created by us, so assume read-write access.
        dir.mark_writable();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockFilesystem;
    use std::collections::HashSet;
    use std::path::Path;

    fn candidates(paths: &[&str]) -> Vec<DataDir> {
        paths
            .iter()
            .map(|p| DataDir::new(p, PathStyle::Posix))
            .collect()
    }

    fn summary(resolution: &Resolution) -> Vec<(&str, bool)> {
        resolution
            .dirs
            .iter()
            .map(|d| (d.path(), d.is_writable()))
            .collect()
    }

    /// Mock where `existing` dirs exist, `writable` ones are writable and
    /// `creatable` ones can be created.
    fn mock_fs(
        existing: &'static [&'static str],
        writable: &'static [&'static str],
        creatable: &'static [&'static str],
    ) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_dir_exists()
            .returning(move |p| existing.iter().any(|e| Path::new(e) == p));
        fs.expect_dir_is_writable()
            .returning(move |p| writable.iter().any(|e| Path::new(e) == p));
        fs.expect_create_dir()
            .returning(move |p| creatable.iter().any(|e| Path::new(e) == p));
        fs
    }

    #[test]
    fn first_existing_writable_wins() {
        let fs = mock_fs(&["/a/", "/b/", "/c/"], &["/b/", "/c/"], &[]);
        let res = resolve_permissions(candidates(&["/a", "/b", "/c"]), PathStyle::Posix, &fs);
        assert_eq!(
            summary(&res),
            [("/a/", false), ("/b/", true), ("/c/", false)]
        );
        assert_eq!(res.write_dir().map(DataDir::path), Some("/b/"));
    }

    #[test]
    fn writability_is_not_probed_after_selection() {
        let mut fs = MockFilesystem::new();
        fs.expect_dir_exists().returning(|_| true);
        fs.expect_dir_is_writable().times(1).returning(|_| true);
        fs.expect_create_dir().never();

        let res = resolve_permissions(
            candidates(&["/a", "/b", "/c", "/d"]),
            PathStyle::Posix,
            &fs,
        );
        assert_eq!(res.write_index, Some(0));
        assert_eq!(res.dirs.len(), 4);
    }

    #[test]
    fn missing_dir_is_created_as_write_dir() {
        let fs = mock_fs(&["/ro/"], &[], &["/new/"]);
        let res = resolve_permissions(candidates(&["/ro", "/new"]), PathStyle::Posix, &fs);
        assert_eq!(summary(&res), [("/ro/", false), ("/new/", true)]);
    }

    #[test]
    fn missing_dirs_are_not_created_once_write_dir_exists() {
        let mut fs = MockFilesystem::new();
        fs.expect_dir_exists()
            .returning(|p| p == Path::new("/home/u/.game/"));
        fs.expect_dir_is_writable().returning(|_| true);
        fs.expect_create_dir().never();

        let res = resolve_permissions(
            candidates(&["/home/u/.game", "/usr/share/game"]),
            PathStyle::Posix,
            &fs,
        );
        assert_eq!(summary(&res), [("/home/u/.game/", true)]);
    }

    #[test]
    fn failed_creation_drops_candidate() {
        let mut fs = MockFilesystem::new();
        fs.expect_dir_exists().returning(|_| false);
        fs.expect_create_dir().times(2).returning(|_| false);

        let res = resolve_permissions(candidates(&["/x", "/x"]), PathStyle::Posix, &fs);
        assert!(res.dirs.is_empty());
        assert_eq!(res.write_index, None);
    }

    #[test]
    fn consecutive_duplicates_collapse() {
        let fs = mock_fs(&["/a/", "/b/"], &["/a/"], &[]);
        let res = resolve_permissions(candidates(&["/a/", "/a/", "/b/"]), PathStyle::Posix, &fs);
        assert_eq!(summary(&res), [("/a/", true), ("/b/", false)]);
    }

    #[test]
    fn rejected_entry_does_not_reset_previous() {
        let fs = mock_fs(&["/a/"], &["/a/"], &[]);
        let res = resolve_permissions(candidates(&["/a", "rel", "/a"]), PathStyle::Posix, &fs);
        assert_eq!(summary(&res), [("/a/", true)]);
    }

    #[test]
    fn out_of_range_write_index_has_no_write_dir() {
        let res = Resolution {
            dirs: candidates(&["/a"]),
            write_index: Some(3),
        };
        assert_eq!(res.write_dir(), None);
    }

    #[test]
    fn non_consecutive_duplicates_survive() {
        let fs = mock_fs(&["/a/", "/b/"], &[], &[]);
        let res = resolve_permissions(
            candidates(&["/a", "/b", "/a", "/a/"]),
            PathStyle::Posix,
            &fs,
        );
        assert_eq!(
            summary(&res),
            [("/a/", false), ("/b/", false), ("/a/", false)]
        );
        assert_eq!(res.write_index, None);
    }

    #[test]
    fn traversal_is_rejected_before_existence_check() {
        let mut fs = MockFilesystem::new();
        fs.expect_dir_exists()
            .withf(|p| p == Path::new("/srv/data/"))
            .times(1)
            .returning(|_| true);
        fs.expect_dir_is_writable().returning(|_| true);

        let res = resolve_permissions(
            candidates(&["/a/../etc/", "/srv/data"]),
            PathStyle::Posix,
            &fs,
        );
        assert_eq!(summary(&res), [("/srv/data/", true)]);
    }

    #[test]
    fn relative_paths_are_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_dir_exists().never();
        fs.expect_create_dir().never();

        let res = resolve_permissions(candidates(&["data", ""]), PathStyle::Posix, &fs);
        assert!(res.dirs.is_empty());
    }

    #[test]
    fn never_more_than_one_writable() {
        let mut fs = MockFilesystem::new();
        fs.expect_dir_exists().returning(|p| !p.ends_with("missing"));
        fs.expect_dir_is_writable().returning(|_| true);
        fs.expect_create_dir().returning(|_| true);

        let paths: Vec<String> = (0..50)
            .map(|i| {
                if i % 3 == 0 {
                    format!("/d{i}/missing")
                } else {
                    format!("/d{}", i / 2)
                }
            })
            .collect();
        let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
        let res = resolve_permissions(candidates(&refs), PathStyle::Posix, &fs);

        assert_eq!(res.dirs.iter().filter(|d| d.is_writable()).count(), 1);
        assert!(res.write_dir().is_some_and(DataDir::is_writable));
    }

    #[test]
    fn preserves_relative_order_of_survivors() {
        let fs = mock_fs(&["/c/", "/a/", "/e/"], &[], &[]);
        let input = ["/c", "/b", "/a", "/d", "/e"];
        let res = resolve_permissions(candidates(&input), PathStyle::Posix, &fs);
        let got: Vec<&str> = res.dirs.iter().map(DataDir::path).collect();
        assert_eq!(got, ["/c/", "/a/", "/e/"]);
        let unique: HashSet<&str> = got.iter().copied().collect();
        assert_eq!(unique.len(), got.len());
    }

    #[test]
    fn windows_paths_resolve() {
        let mut fs = MockFilesystem::new();
        fs.expect_dir_exists().returning(|_| true);
        fs.expect_dir_is_writable().returning(|_| true);

        let dirs = vec![
            DataDir::new("Games\\Spring", PathStyle::Windows),
            DataDir::new("C:\\Games\\Spring", PathStyle::Windows),
        ];
        let res = resolve_permissions(dirs, PathStyle::Windows, &fs);
        assert_eq!(summary(&res), [("C:\\Games\\Spring\\", true)]);
    }
}
