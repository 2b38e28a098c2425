#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("ALLOWED_ORIGINS cannot contain `*` because credentialed CORS needs explicit origins")]
    WildcardOrigin,
}
