use panel_core::{AdminRole, AdminUser};

use crate::app::AppContext;
use crate::cli::{UserAddArgs, UserUpdateArgs};
use crate::errors::CliError;
use crate::helpers::password_or_prompt;
use crate::output::{print_users, users_json};

use super::record;

fn parse_role(value: &str) -> anyhow::Result<AdminRole> {
    value
        .parse::<AdminRole>()
        .map_err(|e| CliError::invalid_input(e.to_string()).into())
}

pub fn handle_users_list(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let mut panel = ctx.open_panel()?;
    let users = panel.get_users()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&users_json(&users))?);
    } else {
        print_users(&users, ctx.quiet());
    }
    Ok(())
}

pub fn handle_users_add(ctx: &AppContext, args: &UserAddArgs) -> anyhow::Result<()> {
    let role = parse_role(&args.role)?;
    let password = password_or_prompt(args.password.clone(), args.no_input, true)?;
    let id = args.id.clone().unwrap_or_else(AdminUser::generate_id);
    let user = AdminUser::new(id, &args.username, password, &args.name, role);

    let mut panel = ctx.open_panel()?;
    panel.add_user(user.clone())?;
    record(&mut panel, "ADD_USER", &format!("Added user {}", user.username))?;

    if !ctx.quiet() {
        println!("Added user {} ({})", user.username, user.id);
    } else {
        println!("{}", user.id);
    }
    Ok(())
}

pub fn handle_users_update(ctx: &AppContext, args: &UserUpdateArgs) -> anyhow::Result<()> {
    let mut panel = ctx.open_panel()?;
    let Some(mut user) = panel.get_users()?.into_iter().find(|u| u.id == args.id) else {
        return Err(CliError::not_found(
            format!("User \"{}\" not found", args.id),
            "Run:\n  panel users list",
        )
        .into());
    };

    if let Some(username) = &args.username {
        user.username = username.clone();
    }
    if let Some(name) = &args.name {
        user.name = name.clone();
    }
    if let Some(password) = &args.password {
        user.password = password.clone();
    }
    if let Some(role) = &args.role {
        user.role = parse_role(role)?;
    }

    panel.update_user(user.clone())?;

    // Keep a cached session in step with the edited record.
    if panel.get_session()?.is_some_and(|s| s.id == user.id) {
        panel.save_session(&user)?;
    }
    record(&mut panel, "UPDATE_USER", &format!("Updated user {}", user.username))?;

    if !ctx.quiet() {
        println!("Updated user {}", user.id);
    }
    Ok(())
}

pub fn handle_users_delete(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
    let mut panel = ctx.open_panel()?;
    if !panel.delete_user(id)? {
        return Err(CliError::not_found(
            format!("User \"{}\" not found", id),
            "Run:\n  panel users list",
        )
        .into());
    }
    record(&mut panel, "DELETE_USER", &format!("Deleted user {}", id))?;

    if !ctx.quiet() {
        println!("Deleted user {}", id);
    }
    Ok(())
}
