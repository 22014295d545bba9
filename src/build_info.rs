//! Compile-time build information, embedded by the build script.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_present() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_commit_shape() {
        assert!(
            BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7,
            "commit should be a short hash or the fallback, got '{BUILD_COMMIT}'"
        );
    }
}
