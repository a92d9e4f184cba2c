use serde::Deserialize;

use crate::error::StatusError;

/// How unrecognized external values are treated when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Unknown codes become `PENDING`.
    #[default]
    Lenient,
    /// Unknown codes are rejected with `StatusError::UnknownCode`.
    Strict,
}

/// Configuration loaded from `STATUS_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub decode_mode: DecodeMode,
}

const ENV_PREFIX: &str = "STATUS_";

impl Config {
    pub fn from_env() -> Result<Self, StatusError> {
        dotenvy::dotenv().ok();
        let config: Self = envy::prefixed(ENV_PREFIX).from_env()?;
        tracing::debug!(decode_mode = ?config.decode_mode, "status config loaded");
        Ok(config)
    }

    /// Same as [`Config::from_env`] but reads from the given pairs instead of
    /// the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, StatusError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn unset_mode_is_lenient() {
        let config = Config::from_vars(vars(&[("UNRELATED", "1")])).unwrap();
        assert_eq!(config.decode_mode, DecodeMode::Lenient);
    }

    #[test]
    fn strict_mode_is_read_from_prefixed_var() {
        let config = Config::from_vars(vars(&[("STATUS_DECODE_MODE", "strict")])).unwrap();
        assert_eq!(config.decode_mode, DecodeMode::Strict);
    }

    #[test]
    fn unknown_mode_is_a_config_error() {
        let err = Config::from_vars(vars(&[("STATUS_DECODE_MODE", "sometimes")])).unwrap_err();
        assert!(matches!(err, StatusError::Config(_)));
    }
}
