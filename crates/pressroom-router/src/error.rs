/// Error types for pattern compilation, route registration and parameter lookup
use thiserror::Error;

/// Errors raised while compiling a route pattern string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("route pattern is empty")]
    Empty,

    #[error("route pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("route pattern `{pattern}` has a parameter segment without a name")]
    EmptyParamName { pattern: String },

    #[error("route pattern `{pattern}` binds `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },

    #[error("wildcard must be the last segment of route pattern `{pattern}`")]
    WildcardNotLast { pattern: String },
}

/// Errors raised while building a [`Router`](crate::Router)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("route pattern `{pattern}` overlaps already registered pattern `{existing}`")]
    DuplicatePattern { pattern: String, existing: String },

    #[error("route name `{0}` is already registered")]
    DuplicateName(String),
}

/// Errors raised when reading a bound parameter as a typed value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("parameter `{name}` was not bound")]
    Missing { name: String },

    #[error("parameter `{name}` has invalid value `{value}`: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}
