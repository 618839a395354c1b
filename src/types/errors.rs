use std::io;
use thiserror::Error;

/// Errors produced while reading chronicle text or persisting a timeline.
///
/// Parsing itself never fails: unreadable lines simply yield no record.
#[derive(Debug, Error)]
pub enum ChronicleError {
    #[error("Failed to open '{path}': {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while writing '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Invalid timeline JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid parser config '{path}': {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_file_message_names_path() {
        let e = ChronicleError::OpenFile {
            path: "vol1.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(e.to_string(), "Failed to open 'vol1.txt': missing");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ChronicleError>();
    }
}
