use std::cmp::Ordering;

use crate::version::encoder::{EncodedVersion, encode};
use crate::version::error::EncodeError;

impl EncodedVersion {
    /// Parse the prefix back into `(major, minor, patch)`.
    ///
    /// Returns `None` for a hand-built value whose prefix is not a dotted triple.
    pub fn release(&self) -> Option<(u64, u64, u64)> {
        let mut parts = self.prefix.split('.').map(|p| p.parse::<u64>().ok());
        let triple = (parts.next()??, parts.next()??, parts.next()??);
        parts.next().is_none().then_some(triple)
    }
}

/// Same order as the SQL `ORDER BY`: prefix as an integer triple, then word,
/// number and build.
impl Ord for EncodedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.release()
            .cmp(&other.release())
            .then_with(|| self.prefix.cmp(&other.prefix))
            .then_with(|| self.prerelease_word.cmp(&other.prerelease_word))
            .then_with(|| self.prerelease_number.cmp(&other.prerelease_number))
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for EncodedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort version strings by their encoding.
///
/// The sort is stable, so versions with equal encodings keep their input order.
/// Fails on the first malformed version.
pub fn sort_versions<S: AsRef<str>>(versions: &[S]) -> Result<Vec<String>, EncodeError> {
    let mut keyed = versions
        .iter()
        .map(|v| {
            let v = v.as_ref();
            encode(v).map(|encoded| (encoded, v.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, v)| v).collect())
}
