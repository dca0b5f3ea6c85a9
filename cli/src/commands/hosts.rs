use std::io::Write;

use pscan_common::config::Config;
use pscan_core::HostList;

use crate::terminal::print;

/// Adds every host to the list, then saves it.
///
/// The first failure aborts the batch before anything is written, so the
/// hosts file is left as it was.
pub fn add(out: &mut impl Write, cfg: &Config, hosts: &[String]) -> anyhow::Result<()> {
    let mut list = HostList::load_from(&cfg.hosts_file)?;

    for host in hosts {
        list.add(host.as_str())?;
        writeln!(out, "Added host: {host}")?;
    }

    list.save(&cfg.hosts_file)?;
    saved(&list, cfg);
    Ok(())
}

/// Deletes every host from the list, then saves it. Same abort rules as [`add`].
pub fn delete(out: &mut impl Write, cfg: &Config, hosts: &[String]) -> anyhow::Result<()> {
    let mut list = HostList::load_from(&cfg.hosts_file)?;

    for host in hosts {
        list.remove(host)?;
        writeln!(out, "Deleted host: {host}")?;
    }

    list.save(&cfg.hosts_file)?;
    saved(&list, cfg);
    Ok(())
}

pub fn list(out: &mut impl Write, cfg: &Config) -> anyhow::Result<()> {
    let list = HostList::load_from(&cfg.hosts_file)?;

    if list.is_empty() && cfg.quiet == 0 {
        print::status(format!("No hosts in {}", cfg.hosts_file.display()));
    }

    for host in list.hosts() {
        writeln!(out, "{host}")?;
    }
    Ok(())
}

fn saved(list: &HostList, cfg: &Config) {
    if cfg.quiet == 0 {
        print::status(format!(
            "{} host(s) saved to {}",
            list.len(),
            cfg.hosts_file.display()
        ));
    }
}
