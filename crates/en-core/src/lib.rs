//! en-core: stable foundation for energetics.
//!
//! Contains:
//! - numeric (Real + float guards shared by the EROEI metrics)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EnError, EnResult};
pub use numeric::*;
