use thiserror::Error;

/// Error types for loading and validating site content
#[derive(Error, Debug)]
pub enum ContentError {
    /// The embedded YAML document could not be deserialized
    #[error("Content parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Two project records share the same id
    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(u32),

    /// A required text field is blank
    #[error("Empty field `{field}` in {entity}")]
    EmptyField { entity: String, field: &'static str },
}

/// Type alias for Result with ContentError
pub type Result<T> = std::result::Result<T, ContentError>;
