//! Version encoding layer
//!
//! Turns semver strings into four bounded columns whose plain ordering matches
//! version precedence, so a database can sort them without a semver collation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Encoder   │────▶│ Prerelease  │     │     SQL     │
//! │ (x.y.z,+b)  │     │(word,number)│     │ (DDL, ORDER)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │    Order    │
//! │ (Ord, sort) │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`encoder`]: `encode` and the `EncodedVersion` row
//! - [`prerelease`]: Prerelease word and number decoding
//! - [`order`]: In-process ordering equivalent to the SQL clause
//! - [`sql`]: Table layout and ordering clause for SQLite
//! - [`error`]: Error types for encoding

pub mod encoder;
pub mod error;
pub mod order;
pub mod prerelease;
pub mod sql;
