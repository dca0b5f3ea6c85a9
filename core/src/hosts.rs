//! # Hosts List
//!
//! The set of scan targets, persisted as a flat text file with one host per
//! line.
//!
//! Lookups go through a binary search over the hosts in ascending byte order.
//! [`HostList::load`] appends lines verbatim (blank lines and duplicates
//! included), so the list is sorted lazily on the first lookup after a load
//! and kept sorted by every insert from then on.
//!
//! Nothing is written to disk until [`HostList::save`], which replaces the
//! file atomically. Two processes saving the same file race: the last rename
//! wins.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::HostsError;

#[cfg(unix)]
const HOSTS_FILE_MODE: u32 = 0o644;

#[derive(Clone, Debug, Default)]
pub struct HostList {
    hosts: Vec<String>,
    /// `hosts` is known to be in ascending order.
    sorted: bool,
}

impl HostList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list hydrated from `path`. A missing file gives an empty list.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, HostsError> {
        let mut list = Self::new();
        list.load(path)?;
        Ok(list)
    }

    /// Hosts in their current order.
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Sorts if needed, then looks `host` up.
    ///
    /// `Ok` holds the index of the match, `Err` the position where `host`
    /// would be inserted to keep the list sorted.
    fn search(&mut self, host: &str) -> Result<usize, usize> {
        if !self.sorted {
            self.hosts.sort_unstable();
            self.sorted = true;
        }
        self.hosts.binary_search_by(|probe| probe.as_str().cmp(host))
    }

    /// Adds `host` unless an identical string is already present.
    ///
    /// Any string is accepted, the empty one included.
    pub fn add(&mut self, host: impl Into<String>) -> Result<(), HostsError> {
        let host = host.into();
        match self.search(&host) {
            Ok(_) => Err(HostsError::DuplicateHost { host }),
            Err(idx) => {
                debug!(host = %host, "Adding host");
                self.hosts.insert(idx, host);
                Ok(())
            }
        }
    }

    /// Removes a single occurrence of `host`.
    pub fn remove(&mut self, host: &str) -> Result<(), HostsError> {
        match self.search(host) {
            Ok(idx) => {
                debug!(host = %host, "Removing host");
                self.hosts.remove(idx);
                Ok(())
            }
            Err(_) => Err(HostsError::HostNotFound {
                host: host.to_string(),
            }),
        }
    }

    /// Appends every line of `path` to the list.
    ///
    /// The `\n` terminator and one `\r` before it (or before end of file) are
    /// stripped; the rest is kept as is. A missing file is not an error: it
    /// loads nothing.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), HostsError> {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No hosts file yet, starting empty");
                return Ok(());
            }
            Err(e) => return Err(HostsError::io(path, e)),
        };

        let before = self.hosts.len();
        let mut reader = BufReader::new(file);
        let mut line = String::new();
        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| HostsError::io(path, e))?;
            if read == 0 {
                break;
            }
            let host = line.strip_suffix('\n').unwrap_or(line.as_str());
            let host = host.strip_suffix('\r').unwrap_or(host);
            self.hosts.push(host.to_string());
        }

        let count = self.hosts.len() - before;
        if count > 0 {
            self.sorted = false;
        }
        debug!(path = %path.display(), count, "Loaded hosts");
        Ok(())
    }

    /// Writes the list to `path` in its current order, one host per line.
    ///
    /// A symlink at `path` is followed and the file it points to is replaced.
    /// The content goes to a fresh temporary file in the target's directory
    /// and is renamed over the target once synced, so readers see either the
    /// old file or the new one.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HostsError> {
        let path = path.as_ref();

        let target = resolve_target(path).map_err(|e| HostsError::io(path, e))?;
        write_atomic(&target, self.render().as_bytes()).map_err(|e| HostsError::io(path, e))?;

        debug!(path = %target.display(), count = self.hosts.len(), "Saved hosts");
        Ok(())
    }

    fn render(&self) -> String {
        let mut output = String::new();
        for host in &self.hosts {
            output.push_str(host);
            output.push('\n');
        }
        output
    }
}

/// The file a save must replace: `path` with symlinks resolved, or `path`
/// itself when nothing exists there yet.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(target) => Ok(target),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

fn write_atomic(target: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Removed on drop if anything below fails.
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(fs::Permissions::from_mode(HOSTS_FILE_MODE))?;
    }

    temp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
