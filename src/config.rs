//! Settings that change how the API behaves.

use clap::ValueEnum;

use crate::auth::Credentials;

/// How strictly create and update request bodies are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ValidationPolicy {
    /// `title`, `amount`, `note` and `tags` must all be present and non-zero:
    /// an empty string, a zero amount or an empty tag list is rejected.
    #[default]
    Strict,
    /// Any field may be absent or zero. Absent fields take their zero value.
    Permissive,
}

/// The settings for the API.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// How request bodies are validated.
    pub validation_policy: ValidationPolicy,
    /// The username and password clients must send with basic auth.
    ///
    /// `None` leaves the API open.
    pub credentials: Option<Credentials>,
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::ValidationPolicy;

    #[test]
    fn default_policy_is_strict() {
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Strict);
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!(
            ValidationPolicy::from_str("strict", true),
            Ok(ValidationPolicy::Strict)
        );
        assert_eq!(
            ValidationPolicy::from_str("permissive", true),
            Ok(ValidationPolicy::Permissive)
        );
    }
}
