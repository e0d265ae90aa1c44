#[derive(Debug)]
pub enum InventoryError {
    DateParse {
        value: String,
        source: chrono::ParseError,
    },
    Io {
        source: std::io::Error,
    },
    Json {
        source: serde_json::Error,
    },
}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParse { value, source } => {
                write!(f, "failed to parse purchase date '{value}': {source}")
            }
            Self::Io { source } => write!(f, "console i/o failed: {source}"),
            Self::Json { source } => write!(f, "failed to serialize report: {source}"),
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DateParse { source, .. } => Some(source),
            Self::Io { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}
