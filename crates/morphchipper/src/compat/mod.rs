//! # Compatibility and Utility Shims

pub mod traits;
