mod commands;
mod terminal;

use commands::{CommandLine, Commands, HostsCommands, hosts};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = commands.config();
    let mut out = std::io::stdout().lock();

    match commands.command {
        Commands::Hosts { command } => match command {
            HostsCommands::Add { hosts: targets } => {
                print::header("adding hosts", cfg.quiet);
                hosts::add(&mut out, &cfg, &targets)
            }
            HostsCommands::Delete { hosts: targets } => {
                print::header("deleting hosts", cfg.quiet);
                hosts::delete(&mut out, &cfg, &targets)
            }
            HostsCommands::List => {
                print::header("hosts list", cfg.quiet);
                hosts::list(&mut out, &cfg)
            }
        },
    }
}
