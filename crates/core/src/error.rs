#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    #[error("missing required field `{record}.{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to read issue file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write issue file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize issue: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize issue: {0}")]
    Deserialization(serde_json::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
}

impl IssueError {
    pub(crate) fn missing(record: &'static str, field: &'static str) -> Self {
        Self::MissingField { record, field }
    }
}

pub type IssueResult<T> = std::result::Result<T, IssueError>;
