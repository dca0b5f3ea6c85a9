#![cfg(test)]
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use pscan_common::config::DEFAULT_HOSTS_FILE;
use pscan_core::{HostList, HostsError};
use tempfile::TempDir;

fn hosts_file(temp_dir: &TempDir, content: Option<&str>) -> PathBuf {
    let path = temp_dir.path().join(DEFAULT_HOSTS_FILE);
    if let Some(content) = content {
        fs::write(&path, content).expect("failed to seed hosts file");
    }
    path
}

#[test]
fn add_then_save_writes_sorted_hosts() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = hosts_file(&temp_dir, Some(""));

    let mut list = HostList::load_from(&path).unwrap();
    list.add("a.com").unwrap();
    list.add("b.com").unwrap();
    list.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a.com\nb.com\n");
}

#[test]
fn remove_then_save_rewrites_file() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = hosts_file(&temp_dir, Some("b.com\na.com\n"));

    let mut list = HostList::load_from(&path).unwrap();
    list.remove("a.com").unwrap();
    list.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "b.com\n");
}

#[test]
fn duplicate_add_leaves_file_untouched() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = hosts_file(&temp_dir, Some("a.com\n"));

    let mut list = HostList::load_from(&path).unwrap();
    let before: Vec<String> = list.hosts().to_vec();

    let err = list.add("a.com").unwrap_err();

    assert!(
        matches!(err, HostsError::DuplicateHost { ref host } if host == "a.com"),
        "unexpected error: {err:?}"
    );
    assert_eq!(list.hosts(), before.as_slice());
    assert_eq!(fs::read_to_string(&path).unwrap(), "a.com\n");
}

#[test]
fn missing_host_removal_leaves_list_unchanged() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = hosts_file(&temp_dir, Some("a.com\nb.com\n"));

    let mut list = HostList::load_from(&path).unwrap();
    let err = list.remove("c.com").unwrap_err();

    assert!(matches!(err, HostsError::HostNotFound { .. }));
    assert_eq!(list.hosts(), &["a.com", "b.com"]);
}

#[test]
fn first_run_without_file() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = hosts_file(&temp_dir, None);

    let mut list = HostList::load_from(&path).unwrap();
    assert!(list.is_empty());

    list.add("scanme.example").unwrap();
    list.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "scanme.example\n");
}

#[test]
fn save_then_load_keeps_the_same_hosts() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = hosts_file(&temp_dir, Some("z.com\nm.com\na.com\n"));

    let mut list = HostList::load_from(&path).unwrap();
    list.save(&path).unwrap();
    // Save without a lookup keeps the loaded order.
    assert_eq!(fs::read_to_string(&path).unwrap(), "z.com\nm.com\na.com\n");

    list.add("k.com").unwrap();
    list.save(&path).unwrap();

    let reloaded = HostList::load_from(&path).unwrap();
    let saved: BTreeSet<&String> = list.hosts().iter().collect();
    let loaded: BTreeSet<&String> = reloaded.hosts().iter().collect();
    assert_eq!(saved, loaded);
    assert_eq!(reloaded.hosts(), &["a.com", "k.com", "m.com", "z.com"]);
}

#[test]
fn duplicate_lines_survive_a_save() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = hosts_file(&temp_dir, Some("b.com\na.com\nb.com\n\n"));

    let mut list = HostList::load_from(&path).unwrap();
    list.add("c.com").unwrap();
    list.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "\na.com\nb.com\nb.com\nc.com\n");
}
