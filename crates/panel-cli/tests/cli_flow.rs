use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_panel"))
}

/// Isolated XDG dirs so tests never touch the real config.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn data_home(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env_remove("PANEL_CONFIG")
            .env_remove("PANEL_STORE")
            .env_remove("PANEL_BACKEND")
            .env_remove("PANEL_PASSWORD")
            .env_remove("PANEL_LOG");
        cmd.output().expect("run panel")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "panel {:?} failed: stdout={}, stderr={}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("valid JSON output")
}

fn init(sandbox: &Sandbox, store: &Path, backend: &str) {
    sandbox.run_ok(&["init", store.to_str().expect("utf-8 path"), "--backend", backend]);
}

#[test]
fn test_cli_init_login_manage_users_and_logs() {
    let sandbox = Sandbox::new();
    let store = sandbox.path("panel.json");
    init(&sandbox, &store, "file");
    assert!(store.exists());
    assert!(sandbox.config_home().join("panel").join("config.toml").exists());

    let users = json(&sandbox.run_ok(&["users", "list", "--json"]));
    assert_eq!(users.as_array().map(Vec::len), Some(1));
    assert_eq!(users[0]["username"], "Admin");
    assert!(users[0].get("password").is_none());

    sandbox.run_ok(&["login", "-u", "Admin", "-p", "@Np123456"]);
    let me = json(&sandbox.run_ok(&["whoami", "--json"]));
    assert_eq!(me["id"], "admin-001");

    sandbox.run_ok(&[
        "users", "add", "-u", "alice", "-n", "Alice", "-p", "pw", "-r", "viewer", "--id", "u-alice",
    ]);
    sandbox.run_ok(&["users", "update", "u-alice", "--name", "Alice L."]);

    let users = json(&sandbox.run_ok(&["users", "list", "--json"]));
    assert_eq!(users[1]["name"], "Alice L.");
    assert_eq!(users[1]["role"], "VIEWER");

    let logs = json(&sandbox.run_ok(&["logs", "list", "--json"]));
    let actions: Vec<&str> = logs
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|l| l["action"].as_str())
        .collect();
    assert_eq!(actions, vec!["UPDATE_USER", "ADD_USER", "LOGIN"]);
    assert_eq!(logs[0]["userId"], "admin-001");

    sandbox.run_ok(&["logout"]);
    let whoami = sandbox.run(&["whoami"]);
    assert_eq!(whoami.status.code(), Some(3));
}

#[test]
fn test_cli_rejects_protected_and_duplicate() {
    let sandbox = Sandbox::new();
    let store = sandbox.path("panel.db");
    init(&sandbox, &store, "sqlite");

    let delete = sandbox.run(&["users", "delete", "admin-001"]);
    assert_eq!(delete.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&delete.stderr).contains("protected"));

    let dup = sandbox.run(&["users", "add", "-u", "Admin", "-n", "Again", "-p", "x"]);
    assert_eq!(dup.status.code(), Some(4));

    let missing = sandbox.run(&["users", "delete", "nobody"]);
    assert_eq!(missing.status.code(), Some(3));
}

#[test]
fn test_cli_login_failure_exits_auth_code() {
    let sandbox = Sandbox::new();
    init(&sandbox, &sandbox.path("panel.json"), "file");

    let login = sandbox.run(&["login", "-u", "Admin", "-p", "wrong"]);
    assert_eq!(login.status.code(), Some(5));

    // Failed logins are not recorded.
    let logs = json(&sandbox.run_ok(&["logs", "list", "--json"]));
    assert_eq!(logs.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_cli_config_defaults_and_set() {
    let sandbox = Sandbox::new();
    let store = sandbox.path("panel.json");
    let store_arg = store.to_str().expect("utf-8 path");

    // --store works without running init.
    let config = json(&sandbox.run_ok(&["config", "show", "--json", "--store", store_arg]));
    assert!(config["scriptUrl"]
        .as_str()
        .expect("string")
        .starts_with("https://script.google.com/"));

    sandbox.run_ok(&["config", "set", "--sheet-id", "sheet-42", "--store", store_arg]);
    sandbox.run_ok(&["config", "set", "--script-url", "", "--store", store_arg]);

    let config = json(&sandbox.run_ok(&["config", "show", "--json", "--store", store_arg]));
    assert_eq!(config["sheetId"], "sheet-42");
    assert!(config["scriptUrl"]
        .as_str()
        .expect("string")
        .starts_with("https://script.google.com/"));
}

#[test]
fn test_cli_logs_add_without_session_is_noop() {
    let sandbox = Sandbox::new();
    init(&sandbox, &sandbox.path("panel.json"), "file");

    sandbox.run_ok(&["logs", "add", "EXPORT", "sheet"]);
    let logs = json(&sandbox.run_ok(&["logs", "list", "--json"]));
    assert_eq!(logs.as_array().map(Vec::len), Some(0));

    sandbox.run_ok(&["login", "-u", "Admin", "-p", "@Np123456"]);
    sandbox.run_ok(&["logs", "add", "EXPORT", "sheet"]);
    let logs = json(&sandbox.run_ok(&["logs", "list", "--json", "--limit", "1"]));
    assert_eq!(logs.as_array().map(Vec::len), Some(1));
    assert_eq!(logs[0]["action"], "EXPORT");
    assert_eq!(logs[0]["details"], "sheet");
}

#[test]
fn test_cli_without_config_reports_not_found() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["users", "list"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("panel init"));
}

#[test]
fn test_cli_init_infers_sqlite_from_store_extension() {
    let sandbox = Sandbox::new();
    let store = sandbox.path("panel.db");
    let store_arg = store.to_str().expect("utf-8 path");
    sandbox.run_ok(&["init", store_arg]);

    let config = std::fs::read_to_string(sandbox.config_home().join("panel").join("config.toml"))
        .expect("config written");
    assert!(config.contains("backend = \"sqlite\""));

    // Opening the same path directly must agree with what init wrote.
    let users = json(&sandbox.run_ok(&["users", "list", "--json", "--store", store_arg]));
    assert_eq!(users[0]["id"], "admin-001");
    let users = json(&sandbox.run_ok(&["users", "list", "--json"]));
    assert_eq!(users.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_cli_login_falls_back_to_builtin_admin_when_user_list_is_corrupt() {
    let sandbox = Sandbox::new();
    let store = sandbox.path("panel.json");
    init(&sandbox, &store, "file");
    sandbox.run_ok(&["users", "add", "-u", "alice", "-n", "Alice", "-p", "pw"]);
    std::fs::write(&store, r#"{"APP_ADMIN_USERS":"{oops"}"#).expect("overwrite store");

    let listed = sandbox.run(&["users", "list", "--json"]);
    assert!(!listed.status.success());

    // Only the built-in admin survives a broken list.
    let alice = sandbox.run(&["login", "-u", "alice", "-p", "pw"]);
    assert_eq!(alice.status.code(), Some(5));

    sandbox.run_ok(&["login", "-u", "Admin", "-p", "@Np123456"]);
    let me = json(&sandbox.run_ok(&["whoami", "--json"]));
    assert_eq!(me["id"], "admin-001");
    assert_eq!(me["role"], "SUPER_ADMIN");

    let logs = json(&sandbox.run_ok(&["logs", "list", "--json"]));
    assert_eq!(logs[0]["action"], "LOGIN");
}
