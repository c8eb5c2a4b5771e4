//! Version encoding into sortable, fixed-width columns
//!
//! `v1.4.0-beta2+linux` becomes:
//!
//! | prefix  | prerelease_word | prerelease_number | build       |
//! |---------|-----------------|-------------------|-------------|
//! | `1.4.0` | `beta`          | `2`               | `linux`     |
//!
//! Ordering rows by the prefix as a dotted integer triple and then by the
//! remaining columns reproduces semver precedence for single-segment
//! prerelease tags and dotted-numeric sub-versions.

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{MAX_BUILD_WORD, MAX_BUILD_WORD_LENGTH, MAX_PRERELEASE_NUMBER};
use crate::version::error::EncodeError;
use crate::version::prerelease::{DecodedPrerelease, decode_prerelease, truncate_chars};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedVersion {
    /// `MAJOR.MINOR.PATCH`
    pub prefix: String,
    pub prerelease_word: String,
    pub prerelease_number: u32,
    pub build: String,
}

impl EncodedVersion {
    /// The four values in column order, ready to bind to an INSERT.
    pub fn columns(&self) -> (&str, &str, u32, &str) {
        (
            &self.prefix,
            &self.prerelease_word,
            self.prerelease_number,
            &self.build,
        )
    }
}

/// Encode a version string into its sortable columns.
///
/// Leading `v` characters are stripped before parsing. Anything the semver
/// grammar rejects is an [`EncodeError::MalformedVersion`].
pub fn encode(raw: &str) -> Result<EncodedVersion, EncodeError> {
    let stripped = raw.trim_start_matches('v');
    let version = Version::parse(stripped).map_err(|source| EncodeError::MalformedVersion {
        version: raw.to_string(),
        source,
    })?;

    let prefix = format!("{}.{}.{}", version.major, version.minor, version.patch);

    let pre = (!version.pre.is_empty()).then(|| version.pre.as_str());
    let DecodedPrerelease { word, number } = decode_prerelease(pre);

    // Only a missing prerelease leaves the number unset; it sorts after every real one.
    let prerelease_number = number.unwrap_or(MAX_PRERELEASE_NUMBER);

    let build = if version.build.is_empty() {
        MAX_BUILD_WORD.to_string()
    } else {
        truncate_chars(version.build.as_str(), MAX_BUILD_WORD_LENGTH).to_string()
    };

    let encoded = EncodedVersion {
        prefix,
        prerelease_word: word,
        prerelease_number,
        build,
    };
    debug!("Encoded {:?} as {:?}", raw, encoded.columns());

    Ok(encoded)
}
