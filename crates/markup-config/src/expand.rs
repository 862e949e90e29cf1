//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config entry in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set ({})", e.var_name, e.cause),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("plain", "f").unwrap(), "plain");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MARKUP_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${MARKUP_EXPAND_UNSET:-fallback}/x", "f").unwrap(),
            "fallback/x"
        );
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MARKUP_EXPAND_MISSING");
        }
        let err = expand_env("${MARKUP_EXPAND_MISSING}", "output.path").unwrap_err();
        assert!(err.to_string().contains("MARKUP_EXPAND_MISSING"));
        assert!(err.to_string().contains("output.path"));
    }
}
