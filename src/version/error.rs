use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Malformed version {version:?}: {source}")]
    MalformedVersion {
        version: String,
        #[source]
        source: semver::Error,
    },
}
