//! Environment-variable precedence through the full provider chain.
//!
//! Uses `figment::Jail` so env changes and the working directory are sandboxed.

use figment::Jail;
use pretty_assertions::assert_eq;
use venture_config::VentureConfig;

#[test]
fn credential_env_var_configures_openrouter() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("OPENROUTER_API_KEY", "sk-or-v1-from-env");

        let config = VentureConfig::load().expect("config loads");
        assert!(config.openrouter.is_configured());
        assert_eq!(config.openrouter.api_key, "sk-or-v1-from-env");
        Ok(())
    });
}

#[test]
fn missing_credential_leaves_openrouter_unconfigured() {
    Jail::expect_with(|jail| {
        jail.clear_env();

        let config = VentureConfig::load().expect("config loads");
        assert!(!config.openrouter.is_configured());
        Ok(())
    });
}

#[test]
fn empty_credential_is_not_configured() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("OPENROUTER_API_KEY", "");

        let config = VentureConfig::load().expect("config loads");
        assert!(!config.openrouter.is_configured());
        Ok(())
    });
}

#[test]
fn prefixed_env_overrides_nested_sections() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("VENTURE_GATEWAY__TEMPERATURE", "0.2");
        jail.set_env("VENTURE_GATEWAY__REQUEST_TIMEOUT_SECS", "45");
        jail.set_env("VENTURE_SERVER__BIND", "0.0.0.0:9000");
        jail.set_env("VENTURE_OPENROUTER__MODEL", "openai/gpt-4o-mini");

        let config = VentureConfig::load().expect("config loads");
        assert!((config.gateway.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.gateway.request_timeout_secs, Some(45));
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.openrouter.model, "openai/gpt-4o-mini");
        Ok(())
    });
}

#[test]
fn conventional_credential_beats_prefixed_one() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("VENTURE_OPENROUTER__API_KEY", "sk-prefixed");
        jail.set_env("OPENROUTER_API_KEY", "sk-conventional");

        let config = VentureConfig::load().expect("config loads");
        assert_eq!(config.openrouter.api_key, "sk-conventional");
        Ok(())
    });
}

#[test]
fn invalid_temperature_from_env_fails_load() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("VENTURE_GATEWAY__TEMPERATURE", "9.5");

        assert!(VentureConfig::load().is_err());
        Ok(())
    });
}
