//! Integration tests for TOML configuration loading.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use venture_config::{DEFAULT_API_URL, VentureConfig};

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[openrouter]
api_key = "sk-or-toml"
model = "meta-llama/llama-3.1-8b-instruct"

[gateway]
temperature = 0.4
idea_max_tokens = 1500
validation_max_tokens = 2500

[server]
bind = "127.0.0.1:3000"
"#,
        )?;

        let config: VentureConfig = Figment::from(Serialized::defaults(VentureConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.openrouter.api_key, "sk-or-toml");
        assert_eq!(config.openrouter.model, "meta-llama/llama-3.1-8b-instruct");
        assert_eq!(config.openrouter.api_url, DEFAULT_API_URL);
        assert_eq!(config.gateway.idea_max_tokens, 1500);
        assert_eq!(config.gateway.validation_max_tokens, 2500);
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gateway]
idea_max_tokens = 900
"#,
        )?;

        let config: VentureConfig = Figment::from(Serialized::defaults(VentureConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gateway.idea_max_tokens, 900);
        assert_eq!(config.gateway.validation_max_tokens, 3000);
        assert!(!config.openrouter.is_configured());
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "venture.toml",
            r#"
[openrouter]
api_key = "sk-or-project"
"#,
        )?;

        let config = VentureConfig::load().expect("config loads");
        assert_eq!(config.openrouter.api_key, "sk-or-project");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "venture.toml",
            r#"
[server]
bind = "127.0.0.1:7000"
"#,
        )?;
        jail.set_env("VENTURE_SERVER__BIND", "127.0.0.1:7001");

        let config = VentureConfig::load().expect("config loads");
        assert_eq!(config.server.bind, "127.0.0.1:7001");
        Ok(())
    });
}

#[test]
fn dotenv_file_supplies_credential() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(".env", "OPENROUTER_API_KEY=sk-or-dotenv\n")?;

        let config = VentureConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.openrouter.api_key, "sk-or-dotenv");
        Ok(())
    });
}
