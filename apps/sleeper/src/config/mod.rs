//! Environment-driven configuration.

pub mod db;
pub mod server;

use std::str::FromStr;

use crate::error::AppError;

/// Read `name` through `lookup`, falling back to `default` when unset.
/// A set but unparsable value is a configuration error.
pub(crate) fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| {
            AppError::config(format!(
                "Environment variable '{name}' has invalid value '{raw}': {e}"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_var;

    #[test]
    fn unset_uses_default() {
        let lookup = |_: &str| None;
        assert_eq!(parse_var(&lookup, "SLEEPER_PORT", 8080u16).unwrap(), 8080);
    }

    #[test]
    fn set_value_is_parsed_and_trimmed() {
        let lookup = |_: &str| Some(" 9090 ".to_string());
        assert_eq!(parse_var(&lookup, "SLEEPER_PORT", 8080u16).unwrap(), 9090);
    }

    #[test]
    fn invalid_value_names_the_variable() {
        let lookup = |_: &str| Some("eighty".to_string());
        let err = parse_var(&lookup, "SLEEPER_PORT", 8080u16).unwrap_err();
        assert!(err.to_string().contains("SLEEPER_PORT"));
    }
}
