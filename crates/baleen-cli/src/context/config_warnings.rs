use baleen_config::{ApiConfig, BaleenConfig, GeneralConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &BaleenConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &BaleenConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    let api_is_default = config.api.endpoint == ApiConfig::default().endpoint;
    if api_is_default && has_single_underscore_key(&env_keys, "BALEEN_API") {
        warnings.push(
            "API config appears default while BALEEN_API_* env vars exist. Use double underscores (example: BALEEN_API__ENDPOINT)."
                .to_string(),
        );
    }

    let general_is_default =
        config.general.default_limit == GeneralConfig::default().default_limit;
    if general_is_default && has_single_underscore_key(&env_keys, "BALEEN_GENERAL") {
        warnings.push(
            "General config appears default while BALEEN_GENERAL_* env vars exist. Use double underscores (example: BALEEN_GENERAL__DEFAULT_LIMIT)."
                .to_string(),
        );
    }

    warnings
}

/// `BALEEN_API_ENDPOINT` matches, `BALEEN_API__ENDPOINT` does not.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use baleen_config::BaleenConfig;

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &BaleenConfig::default(),
            env(&[
                ("BALEEN_API_ENDPOINT", "https://baleen.example.com"),
                ("BALEEN_GENERAL_DEFAULT_LIMIT", "5"),
            ]),
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("BALEEN_API__ENDPOINT"));
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let warnings = collect_unconfigured_warnings(
            &BaleenConfig::default(),
            env(&[("BALEEN_API__TIMEOUT_SECS", "30"), ("BALEEN_LOG", "debug")]),
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let mut config = BaleenConfig::default();
        config.api.endpoint = "https://baleen.example.com".to_string();
        config.general.default_limit = 5;

        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[
                ("BALEEN_API_ENDPOINT", "https://baleen.example.com"),
                ("BALEEN_GENERAL_DEFAULT_LIMIT", "5"),
            ]),
        );

        assert!(warnings.is_empty());
    }
}
