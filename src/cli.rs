use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about = "Create and manage systemd services")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub sub: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Create a systemd service
    #[command(visible_aliases = ["creat", "c"])]
    Create(CreateArgs),
    /// Stop, disable and delete a systemd service
    #[command(visible_aliases = ["rm", "delete"])]
    Remove(RemoveArgs),
    /// Check whether a service is running (Exit 0 = running, 1 = stopped)
    Status(StatusArgs),
}

/// Raw `create` flags. Exec and type combinations are checked by
/// [`crate::validate`], not by clap, so every rejection carries the same
/// message regardless of how the flags were supplied.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Specify the name of the service
    #[arg(short = 'N', long)]
    pub name: String,

    /// Specify the ExecStart file
    #[arg(short = 'F', long)]
    pub file: Option<String>,

    /// Specify the ExecStart command
    #[arg(short = 'C', long)]
    pub exec: Option<String>,

    /// Specify the description of the service
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// Specify the user for the service
    #[arg(short = 'U', long)]
    pub user: Option<String>,

    /// Specify the group for the service
    #[arg(short = 'G', long)]
    pub group: Option<String>,

    /// Specify the type of the service (simple, exec, dbus, notify, forking, oneshot)
    #[arg(short = 'T', long = "type")]
    pub service_type: Option<String>,

    /// Starts the service after creating
    #[arg(short = 's', long)]
    pub start: bool,

    /// Enables the service after creating
    #[arg(short = 'e', long)]
    pub enable: bool,

    /// Skip confirm messages
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Overwrite an existing service
    #[arg(short = 'o', long)]
    pub overwrite: bool,

    /// Print the unit file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RemoveArgs {
    /// Name of the service to remove
    #[arg(short = 'N', long)]
    pub name: String,

    /// Skip confirm messages
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct StatusArgs {
    /// Name of the service to query
    #[arg(short = 'N', long)]
    pub name: String,
}
