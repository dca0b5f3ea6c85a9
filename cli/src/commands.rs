pub mod hosts;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use pscan_common::config::{Config, DEFAULT_HOSTS_FILE, HOSTS_FILE_ENV};

#[derive(Parser)]
#[command(name = "pscan")]
#[command(about = "Fast TCP port scanner.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hosts file that backs the hosts list
    #[arg(short = 'f', long, global = true, env = HOSTS_FILE_ENV, default_value = DEFAULT_HOSTS_FILE)]
    pub hosts_file: PathBuf,

    /// Less decoration; repeat for more
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the hosts list
    ///
    /// Add hosts with the add command, delete them with the delete command
    /// and show them with the list command.
    #[command(alias = "h")]
    Hosts {
        #[command(subcommand)]
        command: HostsCommands,
    },
}

#[derive(Subcommand)]
pub enum HostsCommands {
    /// Add new host(s) to list
    #[command(alias = "a")]
    Add {
        #[arg(required = true, num_args = 1..)]
        hosts: Vec<String>,
    },
    /// Delete host(s) from list
    #[command(alias = "d")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        hosts: Vec<String>,
    },
    /// List hosts in hosts list
    #[command(alias = "l")]
    List,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            hosts_file: self.hosts_file.clone(),
            quiet: self.quiet,
        }
    }
}
