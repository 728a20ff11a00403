use panel_core::validate_local_fallback;

use crate::app::AppContext;
use crate::cli::LoginArgs;
use crate::errors::CliError;
use crate::helpers::password_or_prompt;
use crate::output::{print_user, user_json};

use super::record;

pub fn handle_login(ctx: &AppContext, args: &LoginArgs) -> anyhow::Result<()> {
    let password = password_or_prompt(args.password.clone(), args.no_input, false)?;
    let mut panel = ctx.open_panel()?;

    let user = match panel.validate_user(&args.username, &password) {
        Ok(found) => found,
        Err(err) => {
            tracing::warn!(error = %err, "user list unreadable, trying built-in admin");
            validate_local_fallback(&args.username, &password)
        }
    };
    let Some(user) = user else {
        return Err(CliError::auth_failed("Invalid username or password").into());
    };

    panel.save_session(&user)?;
    panel.add_log(Some(&user), "LOGIN", "Signed in from CLI")?;

    if !ctx.quiet() {
        println!("Logged in as {} ({})", user.username, user.role);
    }
    Ok(())
}

pub fn handle_logout(ctx: &AppContext) -> anyhow::Result<()> {
    let mut panel = ctx.open_panel()?;
    let had_session = panel.get_session()?.is_some();
    record(&mut panel, "LOGOUT", "Signed out from CLI")?;
    panel.clear_session()?;

    if !ctx.quiet() {
        if had_session {
            println!("Logged out");
        } else {
            println!("No active session");
        }
    }
    Ok(())
}

pub fn handle_whoami(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let panel = ctx.open_panel()?;
    let Some(user) = panel.get_session()? else {
        return Err(
            CliError::not_found("No active session", "Run:\n  panel login -u <username>").into(),
        );
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&user_json(&user))?);
    } else if ctx.quiet() {
        println!("{}", user.id);
    } else {
        print_user(&user);
    }
    Ok(())
}
