use std::path::PathBuf;

/// File used when neither `--hosts-file` nor the environment names one.
pub const DEFAULT_HOSTS_FILE: &str = "pScan.hosts";

/// Environment variable consulted for the hosts file path.
pub const HOSTS_FILE_ENV: &str = "PSCAN_HOSTS_FILE";

#[derive(Clone, Debug)]
pub struct Config {
    /// Flat text file backing the hosts list, one host per line.
    pub hosts_file: PathBuf,
    /// Suppresses decorative output. Command results are always printed.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosts_file: PathBuf::from(DEFAULT_HOSTS_FILE),
            quiet: 0,
        }
    }
}
