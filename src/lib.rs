pub mod config;
pub mod logging;
pub mod version;

pub use version::encoder::{EncodedVersion, encode};
pub use version::error::EncodeError;
pub use version::order::sort_versions;
pub use version::prerelease::{DecodedPrerelease, decode_prerelease};
