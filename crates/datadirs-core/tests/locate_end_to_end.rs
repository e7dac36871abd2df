//! End-to-end resolution against the real filesystem.

mod common;

use std::collections::HashMap;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use datadirs_core::{
    DataDirLocater, LocateError, LocaterConfig, LogInitializer, NoopLogInitializer, PlatformCaps,
    RcFileStore, StdFilesystem,
};
use tempfile::tempdir;

use common::{CwdGuard, NoPlatform};

fn config() -> LocaterConfig {
    let mut config = LocaterConfig::for_app("e2e");
    config.caps = PlatformCaps::empty();
    config
}

fn env_with(list: &str) -> Arc<HashMap<String, String>> {
    Arc::new([("E2E_DATADIR".to_string(), list.to_string())].into())
}

fn locater(list: &str) -> DataDirLocater {
    DataDirLocater::new(config())
        .with_environment(env_with(list))
        .with_platform(Arc::new(NoPlatform))
}

fn join_list(paths: &[&Path]) -> String {
    let delimiter = config().style.list_delimiter().to_string();
    paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(&delimiter)
}

fn same_dir(a: &Path, b: &Path) -> bool {
    a.canonicalize().unwrap() == b.canonicalize().unwrap()
}

#[test]
fn single_env_dir_becomes_write_dir_and_cwd() {
    let guard = CwdGuard::acquire();
    let temp = tempdir().unwrap();

    let dirs = locater(&join_list(&[temp.path()]))
        .locate(&mut NoopLogInitializer)
        .unwrap();

    assert_eq!(dirs.len(), 1);
    assert!(dirs.write_dir().is_writable());
    assert!(same_dir(dirs.write_dir().as_path(), temp.path()));
    assert!(same_dir(&env::current_dir().unwrap(), temp.path()));
    drop(guard);
}

#[test]
fn missing_dir_is_created_as_write_dir() {
    let _guard = CwdGuard::acquire();
    let temp = tempdir().unwrap();
    let target = temp.path().join("data").join("game");

    let dirs = locater(&join_list(&[&target]))
        .locate(&mut NoopLogInitializer)
        .unwrap();

    assert!(target.is_dir());
    assert!(same_dir(dirs.write_dir().as_path(), &target));
}

#[test]
fn no_usable_dir_fails_without_changing_cwd() {
    let guard = CwdGuard::acquire();
    let temp = tempdir().unwrap();
    let blocker = temp.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    let err = locater(&join_list(&[&blocker.join("sub"), &blocker.join("other")]))
        .locate(&mut NoopLogInitializer)
        .unwrap_err();

    assert!(matches!(err, LocateError::NoWritableDir { .. }));
    assert!(err.to_string().contains("E2E_DATADIR"));
    assert_eq!(&env::current_dir().unwrap(), guard.previous());
}

struct CwdRecorder {
    seen: Option<(PathBuf, PathBuf)>,
}

impl LogInitializer for CwdRecorder {
    fn initialize(&mut self, write_dir: &Path) -> io::Result<()> {
        self.seen = Some((env::current_dir()?, write_dir.to_path_buf()));
        Ok(())
    }
}

#[test]
fn logging_starts_inside_write_dir() {
    let _guard = CwdGuard::acquire();
    let temp = tempdir().unwrap();

    let mut recorder = CwdRecorder { seen: None };
    locater(&join_list(&[temp.path()]))
        .locate(&mut recorder)
        .unwrap();

    let (cwd, write_dir) = recorder.seen.expect("log initialized");
    assert!(same_dir(&cwd, temp.path()));
    assert!(same_dir(&write_dir, temp.path()));
}

#[test]
fn search_path_prefers_higher_priority_dirs() {
    let _guard = CwdGuard::acquire();
    let temp = tempdir().unwrap();
    let user = temp.path().join("user");
    let shared = temp.path().join("shared");
    std::fs::create_dir_all(shared.join("maps")).unwrap();
    std::fs::write(shared.join("maps").join("a.smf"), b"shared").unwrap();

    let dirs = locater(&join_list(&[&user, &shared]))
        .locate(&mut NoopLogInitializer)
        .unwrap();
    assert_eq!(dirs.len(), 2);
    assert!(dirs.dirs()[0].is_writable());
    assert!(!dirs.dirs()[1].is_writable());

    let fs = StdFilesystem::new();
    let found = dirs.find_file("maps/a.smf", &fs).unwrap();
    assert!(found.starts_with(dirs.dirs()[1].as_path()));

    std::fs::create_dir_all(dirs.write_path("maps")).unwrap();
    std::fs::write(dirs.write_path("maps/a.smf"), b"user").unwrap();
    let found = dirs.find_file("maps/a.smf", &fs).unwrap();
    assert!(found.starts_with(dirs.write_dir().as_path()));
}

#[test]
fn config_store_key_is_used_when_env_is_unset() {
    let _guard = CwdGuard::acquire();
    let temp = tempdir().unwrap();
    let data = temp.path().join("from-rc");

    let mut store = RcFileStore::empty(temp.path().join(".e2erc"));
    store.set("E2eData", &join_list(&[&data])).unwrap();
    let store = RcFileStore::load(store.path()).unwrap();

    let dirs = DataDirLocater::new(config())
        .with_environment(Arc::new(HashMap::<String, String>::new()))
        .with_config_store(Arc::new(store))
        .with_platform(Arc::new(NoPlatform))
        .locate(&mut NoopLogInitializer)
        .unwrap();

    assert!(same_dir(dirs.write_dir().as_path(), &data));
}
