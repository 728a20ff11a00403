//! Panel CLI - local store for an admin panel
//!
//! Command-line front end over `panel-core`: sign in, manage admin users,
//! edit the system configuration, and read the activity log.

use clap::{CommandFactory, Parser};
use clap_complete::generate;

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;

use app::AppContext;
use cli::{Cli, Commands, ConfigAction, LogsAction, UsersAction};
use errors::exit_code_for;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Commands::Init(args) => commands::handle_init(cli, args),
        Commands::Login(args) => commands::handle_login(&ctx, args),
        Commands::Logout => commands::handle_logout(&ctx),
        Commands::Whoami { json } => commands::handle_whoami(&ctx, *json),
        Commands::Users { action } => match action {
            UsersAction::List { json } => commands::handle_users_list(&ctx, *json),
            UsersAction::Add(args) => commands::handle_users_add(&ctx, args),
            UsersAction::Update(args) => commands::handle_users_update(&ctx, args),
            UsersAction::Delete { id } => commands::handle_users_delete(&ctx, id),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => commands::handle_config_show(&ctx, *json),
            ConfigAction::Set {
                script_url,
                sheet_id,
                drive_id,
            } => commands::handle_config_set(
                &ctx,
                script_url.as_deref(),
                sheet_id.as_deref(),
                drive_id.as_deref(),
            ),
        },
        Commands::Logs { action } => match action {
            LogsAction::List { limit, json } => commands::handle_logs_list(&ctx, *limit, *json),
            LogsAction::Add { action, details } => {
                commands::handle_logs_add(&ctx, action, details)
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "panel", &mut std::io::stdout());
            Ok(())
        }
    }
}
