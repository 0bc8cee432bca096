/// Application metadata, captured from Cargo at compile time.
///
/// Used by health endpoints and startup logs to report which binary is
/// running and at which version.
#[derive(Clone, Copy, Debug)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Capture the calling crate's name and version.
///
/// Must be invoked from the binary crate itself so the `CARGO_PKG_*`
/// values resolve to the app, not to this library.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_app_info_captures_cargo_metadata() {
        let info = crate::app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }

    #[test]
    fn test_app_info_is_copy() {
        let info = crate::app_info!();
        let copy = info;
        assert_eq!(copy.name, info.name);
    }
}
