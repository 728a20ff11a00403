use crate::app::AppContext;
use crate::output::{logs_json, print_logs};

pub fn handle_logs_list(ctx: &AppContext, limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    let panel = ctx.open_panel()?;
    let mut logs = panel.get_logs()?;
    if let Some(limit) = limit {
        logs.truncate(limit);
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&logs_json(&logs)?)?);
    } else {
        print_logs(&logs, ctx.quiet());
    }
    Ok(())
}

pub fn handle_logs_add(ctx: &AppContext, action: &str, details: &str) -> anyhow::Result<()> {
    let mut panel = ctx.open_panel()?;
    let actor = panel.get_session()?;
    match panel.add_log(actor.as_ref(), action, details)? {
        Some(entry) => {
            if !ctx.quiet() {
                println!("Logged {}", entry.id);
            }
        }
        None => {
            if !ctx.quiet() {
                println!("No active session; nothing logged");
            }
        }
    }
    Ok(())
}
