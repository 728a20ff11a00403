//! Text and table output formatting.

use chrono::Local;
use comfy_table::presets::NOTHING;
use comfy_table::{ContentArrangement, Table};

use panel_core::{ActivityLog, AdminUser, SystemConfig};

fn plain_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    table
}

pub fn print_users(users: &[AdminUser], quiet: bool) {
    if quiet {
        for user in users {
            println!("{}", user.id);
        }
        return;
    }
    let mut table = plain_table(&["ID", "USERNAME", "NAME", "ROLE"]);
    for user in users {
        table.add_row(vec![
            user.id.clone(),
            user.username.clone(),
            user.name.clone(),
            user.role.to_string(),
        ]);
    }
    println!("{}", table);
}

pub fn print_user(user: &AdminUser) {
    println!("id:       {}", user.id);
    println!("username: {}", user.username);
    println!("name:     {}", user.name);
    println!("role:     {}", user.role);
}

pub fn print_config(config: &SystemConfig) {
    println!("script_url = {}", config.script_url);
    println!("sheet_id   = {}", config.sheet_id);
    println!("drive_id   = {}", config.drive_id);
}

pub fn print_logs(logs: &[ActivityLog], quiet: bool) {
    if quiet {
        for log in logs {
            println!("{}", log.id);
        }
        return;
    }
    let mut table = plain_table(&["TIMESTAMP", "USER", "ROLE", "ACTION", "DETAILS"]);
    for log in logs {
        table.add_row(vec![
            log.timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            log.user_name.clone(),
            log.user_role.to_string(),
            log.action.clone(),
            log.details.clone(),
        ]);
    }
    println!("{}", table);
}
