use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use panel_core::VERSION;

use crate::config::StoreBackend;

/// Panel - local store for the admin panel's users, config and activity log
#[derive(Parser)]
#[command(name = "panel")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, env = "PANEL_STORE")]
    pub store: Option<String>,

    /// Storage backend for --store
    #[arg(long, global = true, value_enum, env = "PANEL_BACKEND")]
    pub backend: Option<StoreBackend>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log store activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and an initialized store
    Init(InitArgs),

    /// Check credentials and start a session
    Login(LoginArgs),

    /// End the current session
    Logout,

    /// Show the current session user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage admin users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Show or change the system configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show or append to the activity log
    Logs {
        #[command(subcommand)]
        action: LogsAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `login` command
#[derive(Args)]
pub struct LoginArgs {
    /// Username
    #[arg(short, long)]
    pub username: String,

    /// Password (prompted when omitted)
    #[arg(short, long, env = "PANEL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// List users
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a user
    Add(UserAddArgs),

    /// Change fields of an existing user
    Update(UserUpdateArgs),

    /// Delete a user by id
    Delete {
        /// User id
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// Arguments for `users add`
#[derive(Args)]
pub struct UserAddArgs {
    /// Login name (must be unique)
    #[arg(short, long)]
    pub username: String,

    /// Display name
    #[arg(short, long)]
    pub name: String,

    /// Password (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Role (`super_admin`, `admin`, `viewer`)
    #[arg(short, long, default_value = "admin")]
    pub role: String,

    /// Explicit id (generated when omitted)
    #[arg(long)]
    pub id: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for `users update`
#[derive(Args)]
pub struct UserUpdateArgs {
    /// User id
    #[arg(value_name = "ID")]
    pub id: String,

    /// New login name
    #[arg(short, long)]
    pub username: Option<String>,

    /// New display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New password
    #[arg(short, long)]
    pub password: Option<String>,

    /// New role
    #[arg(short, long)]
    pub role: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one or more configuration values
    Set {
        /// Apps Script endpoint
        #[arg(long)]
        script_url: Option<String>,

        /// Spreadsheet id
        #[arg(long)]
        sheet_id: Option<String>,

        /// Drive folder id
        #[arg(long)]
        drive_id: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum LogsAction {
    /// List entries, newest first
    List {
        /// Limit number of results
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record an action for the session user
    Add {
        /// Action name
        #[arg(value_name = "ACTION")]
        action: String,

        /// Free-form details
        #[arg(value_name = "DETAILS", default_value = "")]
        details: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_global_store_after_subcommand() {
        let cli = Cli::try_parse_from([
            "panel",
            "users",
            "delete",
            "u-1",
            "--store",
            "/tmp/p.db",
            "--backend",
            "sqlite",
        ])
        .unwrap();
        assert_eq!(cli.store.as_deref(), Some("/tmp/p.db"));
        assert_eq!(cli.backend, Some(StoreBackend::Sqlite));
        assert!(matches!(
            cli.command,
            Commands::Users {
                action: UsersAction::Delete { .. }
            }
        ));
    }
}
