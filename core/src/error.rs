//! Host list error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostsError {
    /// Host already present (exact, case-sensitive match)
    #[error("host {host} already in the list")]
    DuplicateHost { host: String },

    /// Host absent from the list
    #[error("host {host} is not in the list")]
    HostNotFound { host: String },

    /// Reading or writing the hosts file failed
    #[error("failed to access hosts file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HostsError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
