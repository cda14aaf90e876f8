//! Crate version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The enforest version string (for example, `0.1.0`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION.split('.').count(), 3);
    }
}
