use hunter_config::{DEFAULT_BACKEND_URL, GeneralConfig, HunterConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &HunterConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HunterConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.backend.url == DEFAULT_BACKEND_URL
        && has_single_underscore_key(&env_keys, "HUNTER_BACKEND")
    {
        warnings.push(
            "backend.url is the default while HUNTER_BACKEND_* env vars exist. Use double underscores (example: HUNTER_BACKEND__URL)."
                .to_string(),
        );
    }

    if config.general == GeneralConfig::default()
        && has_single_underscore_key(&env_keys, "HUNTER_GENERAL")
    {
        warnings.push(
            "general config is the default while HUNTER_GENERAL_* env vars exist. Use double underscores (example: HUNTER_GENERAL__FORMAT)."
                .to_string(),
        );
    }

    warnings
}

/// `PREFIX_X` but not `PREFIX__X`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
