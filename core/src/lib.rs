//! # pscan core
//!
//! Host-list management for the scanner: an in-memory collection of
//! hostnames backed by a flat text file.

pub mod error;
pub mod hosts;

pub use error::HostsError;
pub use hosts::HostList;
