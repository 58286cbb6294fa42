//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use baleen_config::{BaleenConfig, PROJECT_CONFIG_DIR};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

fn isolate_user_config(jail: &mut Jail) {
    let config_home = jail.directory().join("xdg");
    jail.set_env("XDG_CONFIG_HOME", config_home.display());
}

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
endpoint = "https://baleen.example.com/api"
timeout_secs = 30
user_agent = "ops-console"
"#,
        )?;

        let config: BaleenConfig = Figment::from(Serialized::defaults(BaleenConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.endpoint, "https://baleen.example.com/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.user_agent, "ops-console");
        assert!(config.api.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
endpoint = "http://10.0.0.5:9000"
"#,
        )?;

        let config: BaleenConfig = Figment::from(Serialized::defaults(BaleenConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.endpoint, "http://10.0.0.5:9000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join(PROJECT_CONFIG_DIR))
            .expect("create project config dir");
        jail.create_file(
            format!("{PROJECT_CONFIG_DIR}/config.toml"),
            r#"
[general]
default_limit = 5
"#,
        )?;

        let config = BaleenConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn user_config_is_picked_up() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        let user_dir = jail.directory().join("xdg").join("baleen");
        std::fs::create_dir_all(&user_dir).expect("create user config dir");
        std::fs::write(
            user_dir.join("config.toml"),
            "[api]\nendpoint = \"https://user.example.com\"\n",
        )
        .expect("write user config");

        let config = BaleenConfig::load().expect("config loads");
        assert_eq!(config.api.endpoint, "https://user.example.com");
        Ok(())
    });
}

#[test]
fn project_config_beats_user_config() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        let user_dir = jail.directory().join("xdg").join("baleen");
        std::fs::create_dir_all(&user_dir).expect("create user config dir");
        std::fs::write(
            user_dir.join("config.toml"),
            "[api]\nendpoint = \"https://user.example.com\"\n",
        )
        .expect("write user config");
        std::fs::create_dir_all(jail.directory().join(PROJECT_CONFIG_DIR))
            .expect("create project config dir");
        jail.create_file(
            format!("{PROJECT_CONFIG_DIR}/config.toml"),
            "[api]\nendpoint = \"https://project.example.com\"\n",
        )?;

        let config = BaleenConfig::load().expect("config loads");
        assert_eq!(config.api.endpoint, "https://project.example.com");
        Ok(())
    });
}

#[test]
fn invalid_type_is_reported() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join(PROJECT_CONFIG_DIR))
            .expect("create project config dir");
        jail.create_file(
            format!("{PROJECT_CONFIG_DIR}/config.toml"),
            "[api]\ntimeout_secs = \"soon\"\n",
        )?;

        let err = BaleenConfig::load().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
        Ok(())
    });
}
