use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("NEWSPULSE_LOG_LEVEL", "info");
    let user_agent = or_default("NEWSPULSE_USER_AGENT", "Mozilla/5.0 (newspulse)");
    let request_timeout_secs = parse_u64("NEWSPULSE_REQUEST_TIMEOUT_SECS", "15")?;
    let result_cap = parse_usize("NEWSPULSE_RESULT_CAP", "10")?;
    let preview_chars = parse_usize("NEWSPULSE_PREVIEW_CHARS", "500")?;
    let render_wait_ms = parse_u64("NEWSPULSE_RENDER_WAIT_MS", "3000")?;
    let headless_cmd = or_default("NEWSPULSE_HEADLESS_CMD", "chromium");
    let ner_url = or_default("NEWSPULSE_NER_URL", "http://127.0.0.1:8601");
    let sentiment_url = or_default("NEWSPULSE_SENTIMENT_URL", "http://127.0.0.1:8602");

    Ok(AppConfig {
        log_level,
        user_agent,
        request_timeout_secs,
        result_cap,
        preview_chars,
        render_wait_ms,
        headless_cmd,
        ner_url,
        sentiment_url,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_defaults_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.user_agent, "Mozilla/5.0 (newspulse)");
        assert_eq!(cfg.request_timeout_secs, 15);
        assert_eq!(cfg.result_cap, 10);
        assert_eq!(cfg.preview_chars, 500);
        assert_eq!(cfg.render_wait_ms, 3000);
        assert_eq!(cfg.headless_cmd, "chromium");
        assert_eq!(cfg.ner_url, "http://127.0.0.1:8601");
        assert_eq!(cfg.sentiment_url, "http://127.0.0.1:8602");
    }

    #[test]
    fn build_app_config_result_cap_override() {
        let mut map = HashMap::new();
        map.insert("NEWSPULSE_RESULT_CAP", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.result_cap, 5);
    }

    #[test]
    fn build_app_config_result_cap_invalid() {
        let mut map = HashMap::new();
        map.insert("NEWSPULSE_RESULT_CAP", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSPULSE_RESULT_CAP"),
            "expected InvalidEnvVar(NEWSPULSE_RESULT_CAP), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_render_wait_override() {
        let mut map = HashMap::new();
        map.insert("NEWSPULSE_RENDER_WAIT_MS", "5000");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.render_wait_ms, 5000);
    }

    #[test]
    fn build_app_config_render_wait_invalid() {
        let mut map = HashMap::new();
        map.insert("NEWSPULSE_RENDER_WAIT_MS", "3s");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSPULSE_RENDER_WAIT_MS"),
            "expected InvalidEnvVar(NEWSPULSE_RENDER_WAIT_MS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_model_url_overrides() {
        let mut map = HashMap::new();
        map.insert("NEWSPULSE_NER_URL", "http://models.internal:9000");
        map.insert("NEWSPULSE_SENTIMENT_URL", "http://models.internal:9001");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.ner_url, "http://models.internal:9000");
        assert_eq!(cfg.sentiment_url, "http://models.internal:9001");
    }

    #[test]
    fn build_app_config_user_agent_override() {
        let mut map = HashMap::new();
        map.insert("NEWSPULSE_USER_AGENT", "custom-agent/2.0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
    }
}
