//! Records persisted by the panel.
//!
//! Field names serialize in camelCase so documents written here are
//! readable by the browser panel and the other way round.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PanelError;

/// Id of the bootstrap super-admin.
pub const BOOTSTRAP_ADMIN_ID: &str = "admin-001";

/// Username of the bootstrap super-admin.
pub const BOOTSTRAP_ADMIN_USERNAME: &str = "Admin";

const BOOTSTRAP_ADMIN_PASSWORD: &str = "@Np123456";
const BOOTSTRAP_ADMIN_NAME: &str = "Primary Administrator (Offline)";

pub const DEFAULT_SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbwHfcWid0yqs0C2q3nnspJqsBkDdGmH59R02ULSDOIbyPNcfoe_l8ngzelriJJpKdSq/exec";
pub const DEFAULT_SHEET_ID: &str = "1ge8sumS3qX7lsw29cIoBQrsW5vNYI5yfr_BPveAiLmc";
pub const DEFAULT_DRIVE_ID: &str = "142UYdJGFhP3TtJ_fSJA2WUW3E8iHTIWW";

/// Permission level of an admin account.
///
/// Roles written by other tools that are not one of the known three are
/// kept verbatim in `Other` so the rest of the user list stays readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminRole {
    SuperAdmin,
    Admin,
    Viewer,
    #[serde(untagged)]
    Other(String),
}

impl AdminRole {
    pub fn as_str(&self) -> &str {
        match self {
            AdminRole::SuperAdmin => "SUPER_ADMIN",
            AdminRole::Admin => "ADMIN",
            AdminRole::Viewer => "VIEWER",
            AdminRole::Other(name) => name,
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = PanelError;

    /// Accepts `SUPER_ADMIN`, `super_admin` and `super-admin` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "SUPER_ADMIN" => Ok(AdminRole::SuperAdmin),
            "ADMIN" => Ok(AdminRole::Admin),
            "VIEWER" => Ok(AdminRole::Viewer),
            other => Err(PanelError::InvalidInput(format!(
                "Unknown role \"{}\" (expected super_admin, admin or viewer)",
                other
            ))),
        }
    }
}

/// An admin account.
///
/// `password` is held and compared in plaintext, matching what the
/// browser panel stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: AdminRole,
}

impl AdminUser {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: AdminRole,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            password: password.into(),
            name: name.into(),
            role,
        }
    }

    /// The super-admin written on first access to the user list.
    pub fn bootstrap_admin() -> Self {
        Self::new(
            BOOTSTRAP_ADMIN_ID,
            BOOTSTRAP_ADMIN_USERNAME,
            BOOTSTRAP_ADMIN_PASSWORD,
            BOOTSTRAP_ADMIN_NAME,
            AdminRole::SuperAdmin,
        )
    }

    /// Generate a fresh `user-<uuid>` id.
    pub fn generate_id() -> String {
        format!("user-{}", Uuid::new_v4().simple())
    }

    /// Whether this is the bootstrap account, which cannot be deleted.
    pub fn is_protected(&self) -> bool {
        self.username == BOOTSTRAP_ADMIN_USERNAME || self.id == BOOTSTRAP_ADMIN_ID
    }
}

/// Backend locations used by the panel. All three are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub script_url: String,
    pub sheet_id: String,
    pub drive_id: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            drive_id: DEFAULT_DRIVE_ID.to_string(),
        }
    }
}

/// Config as read back from storage, where any field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredConfig {
    #[serde(default)]
    pub script_url: Option<String>,
    #[serde(default)]
    pub sheet_id: Option<String>,
    #[serde(default)]
    pub drive_id: Option<String>,
}

impl StoredConfig {
    /// Overlay stored fields onto the defaults. An empty `scriptUrl`
    /// counts as missing; the other fields are taken as stored.
    pub fn merge_with_defaults(self) -> SystemConfig {
        let defaults = SystemConfig::default();
        SystemConfig {
            script_url: self
                .script_url
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.script_url),
            sheet_id: self.sheet_id.unwrap_or(defaults.sheet_id),
            drive_id: self.drive_id.unwrap_or(defaults.drive_id),
        }
    }
}

/// One recorded admin action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_role: AdminRole,
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLog {
    /// Build an entry for `user`, stamped now.
    pub fn new(user: &AdminUser, action: impl Into<String>, details: impl Into<String>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: Self::generate_id(timestamp),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_role: user.role.clone(),
            action: action.into(),
            details: details.into(),
            timestamp,
        }
    }

    /// `log-<unix millis>-<5 random lowercase alphanumerics>`
    fn generate_id(at: DateTime<Utc>) -> String {
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(5).collect();
        format!("log-{}-{}", at.timestamp_millis(), suffix)
    }
}
