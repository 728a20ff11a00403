//! Command handlers, one module per command group.

pub mod config;
pub mod init;
pub mod logs;
pub mod session;
pub mod users;

pub use config::{handle_config_set, handle_config_show};
pub use init::handle_init;
pub use logs::{handle_logs_add, handle_logs_list};
pub use session::{handle_login, handle_logout, handle_whoami};
pub use users::{handle_users_add, handle_users_delete, handle_users_list, handle_users_update};

use crate::app::Panel;

/// Record `action` against whoever is logged in.
///
/// Without a session this is a no-op, matching `PanelStore::add_log`.
pub(crate) fn record(panel: &mut Panel, action: &str, details: &str) -> anyhow::Result<()> {
    let actor = panel.get_session()?;
    panel.add_log(actor.as_ref(), action, details)?;
    Ok(())
}
