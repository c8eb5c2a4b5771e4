//! Prerelease decoding
//!
//! Splits a prerelease specifier into a word and a number that can be ordered
//! as two independent columns:
//! - absent: the sentinel word with no number
//! - `1.2.3`: a packed dotted-numeric sub-version under the sentinel word
//! - `beta10`: the text before the first digit run and the run itself

use semver::Version;
use tracing::{debug, trace};

use crate::config::{
    MAX_PRERELEASE_NUMBER, MAX_PRERELEASE_NUMBER_LENGTH, MAX_PRERELEASE_WORD,
    MAX_PRERELEASE_WORD_LENGTH, PRERELEASE_INT_FACTOR,
};

/// Word and number decoded from a prerelease specifier.
///
/// `number` is `None` only when there was no prerelease at all; the encoder
/// resolves it to [`MAX_PRERELEASE_NUMBER`] once the whole version is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPrerelease {
    pub word: String,
    pub number: Option<u32>,
}

impl DecodedPrerelease {
    fn new(word: impl Into<String>, number: Option<u32>) -> Self {
        Self {
            word: word.into(),
            number,
        }
    }
}

pub fn decode_prerelease(prerelease: Option<&str>) -> DecodedPrerelease {
    let Some(prerelease) = prerelease else {
        return DecodedPrerelease::new(MAX_PRERELEASE_WORD, None);
    };

    if let Some(number) = pack_dotted_numeric(prerelease) {
        return DecodedPrerelease::new(MAX_PRERELEASE_WORD, Some(number));
    }

    split_word_and_number(prerelease)
}

/// Packs a bare `x.y.z` prerelease (as in `1.0.0-2.1.0`) into one integer.
///
/// Slots are not range checked: `1.2.1000` packs to 1_003_000. Returns `None`
/// when the prerelease is not a bare triple or the result exceeds
/// [`MAX_PRERELEASE_NUMBER`].
///
/// A triple with its own suffix (`1.2.3-rc1`) is not packed, unlike a loose
/// semver parse that would keep 1_002_003; it goes through the word and number
/// split instead and yields `("", 1)`.
fn pack_dotted_numeric(prerelease: &str) -> Option<u32> {
    let version = Version::parse(prerelease).ok()?;
    if !version.pre.is_empty() || !version.build.is_empty() {
        return None;
    }

    let packed = version
        .major
        .checked_mul(PRERELEASE_INT_FACTOR * PRERELEASE_INT_FACTOR)
        .and_then(|n| n.checked_add(version.minor.checked_mul(PRERELEASE_INT_FACTOR)?))
        .and_then(|n| n.checked_add(version.patch));

    match packed {
        Some(n) if n <= u64::from(MAX_PRERELEASE_NUMBER) => u32::try_from(n).ok(),
        _ => {
            debug!(
                "Dotted prerelease {:?} exceeds {}, decoding as word and number",
                prerelease, MAX_PRERELEASE_NUMBER
            );
            None
        }
    }
}

fn split_word_and_number(prerelease: &str) -> DecodedPrerelease {
    let Some(start) = prerelease.find(|c: char| c.is_ascii_digit()) else {
        return DecodedPrerelease::new(
            truncate_chars(prerelease, MAX_PRERELEASE_WORD_LENGTH),
            Some(0),
        );
    };

    let rest = &prerelease[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    let digits = &digits[..digits.len().min(MAX_PRERELEASE_NUMBER_LENGTH)];
    if end > digits.len() {
        trace!("Truncated prerelease number {:?} to {}", &rest[..end], digits);
    }

    let number = digits.parse::<u32>().unwrap_or_default();

    DecodedPrerelease::new(
        truncate_chars(&prerelease[..start], MAX_PRERELEASE_WORD_LENGTH),
        Some(number),
    )
}

/// Returns at most the first `max` characters of `s`.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => {
            trace!("Truncated {:?} to {} characters", s, max);
            &s[..idx]
        }
        None => s,
    }
}
