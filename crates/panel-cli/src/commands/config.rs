use crate::app::AppContext;
use crate::errors::CliError;
use crate::output::{config_json, print_config};

use super::record;

pub fn handle_config_show(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let panel = ctx.open_panel()?;
    let config = panel.get_config()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&config_json(&config))?);
    } else {
        print_config(&config);
    }
    Ok(())
}

pub fn handle_config_set(
    ctx: &AppContext,
    script_url: Option<&str>,
    sheet_id: Option<&str>,
    drive_id: Option<&str>,
) -> anyhow::Result<()> {
    if script_url.is_none() && sheet_id.is_none() && drive_id.is_none() {
        return Err(CliError::invalid_input(
            "Nothing to change. Pass --script-url, --sheet-id or --drive-id.",
        )
        .into());
    }

    let mut panel = ctx.open_panel()?;
    let mut config = panel.get_config()?;
    let mut changed = Vec::new();
    if let Some(value) = script_url {
        config.script_url = value.to_string();
        changed.push("scriptUrl");
    }
    if let Some(value) = sheet_id {
        config.sheet_id = value.to_string();
        changed.push("sheetId");
    }
    if let Some(value) = drive_id {
        config.drive_id = value.to_string();
        changed.push("driveId");
    }
    panel.save_config(&config)?;
    record(
        &mut panel,
        "UPDATE_CONFIG",
        &format!("Changed {}", changed.join(", ")),
    )?;

    if !ctx.quiet() {
        println!("Configuration saved");
    }
    Ok(())
}
