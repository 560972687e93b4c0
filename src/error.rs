use thiserror::Error;

/// Main error type for ssmtag
#[derive(Error, Debug)]
pub enum SsmError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document is not syntactically valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Expected field or structure is missing from an otherwise valid document
    #[error("Schema error: {0}")]
    Schema(String),

    /// Digit-suffix mode selected but the file name contains no digits
    #[error("Format error: {0}")]
    Format(String),
}

impl SsmError {
    /// Classify a serde_json failure: syntax problems are parse errors,
    /// structural problems (missing/mistyped fields) are schema errors.
    pub fn from_json(path: &str, err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => {
                SsmError::Schema(format!("{}: {}", path, err))
            }
            _ => SsmError::Parse(format!("{}: {}", path, err)),
        }
    }
}

/// Convenient Result type using SsmError
pub type Result<T> = std::result::Result<T, SsmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SsmError::Format("no digits in name.json".to_string());
        assert!(err.to_string().contains("Format error"));
        assert!(err.to_string().contains("no digits"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ssm_err: SsmError = io_err.into();
        assert!(matches!(ssm_err, SsmError::Io(_)));
    }

    #[test]
    fn test_from_json_syntax_is_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let ssm_err = SsmError::from_json("bad.json", err);
        assert!(matches!(ssm_err, SsmError::Parse(_)));
        assert!(ssm_err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_from_json_missing_field_is_schema() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Needs {
            id: i64,
        }
        let err = serde_json::from_str::<Needs>("{}").unwrap_err();
        let ssm_err = SsmError::from_json("bad.json", err);
        assert!(matches!(ssm_err, SsmError::Schema(_)));
    }
}
