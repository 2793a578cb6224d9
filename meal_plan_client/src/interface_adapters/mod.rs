// Interface adapters: HTTP client, console output and command-line arguments.

pub mod cli;
pub mod clients;
pub mod notifier;
