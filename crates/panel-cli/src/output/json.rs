//! JSON output formatting.

use panel_core::{ActivityLog, AdminUser, SystemConfig};

/// Convert a user to JSON for output, without the password.
pub fn user_json(user: &AdminUser) -> serde_json::Value {
    serde_json::json!({
        "id": user.id,
        "username": user.username,
        "name": user.name,
        "role": user.role,
    })
}

pub fn users_json(users: &[AdminUser]) -> Vec<serde_json::Value> {
    users.iter().map(user_json).collect()
}

pub fn config_json(config: &SystemConfig) -> serde_json::Value {
    serde_json::json!({
        "scriptUrl": config.script_url,
        "sheetId": config.sheet_id,
        "driveId": config.drive_id,
    })
}

/// Log entries serialize in their stored (camelCase) shape.
pub fn logs_json(logs: &[ActivityLog]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(logs)?)
}
