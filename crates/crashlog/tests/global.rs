mod utils;

#[cfg(test)]
mod tests {
    use std::fs;

    use crashlog::error::InitError;
    use crashlog::LogLevel;
    use super::utils::*;

    // The process-wide instance can only be installed once, so everything that
    // touches it lives in this one test.
    #[test]
    fn test_global_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("global.log");
        let (config, lines) = test_config();

        assert!(!crashlog::is_initialized());
        assert_eq!(crashlog::init_config(config.with_tag_prefix("G_")), Ok(()));
        assert!(crashlog::is_initialized());
        assert_eq!(crashlog::init(test_context()), Err(InitError::AlreadyInitialized));
        assert_eq!(
            crashlog::init_with(test_context(), "Other_", false),
            Err(InitError::AlreadyInitialized)
        );

        crashlog::info!("Boot", "started in {} ms", 12);
        assert_eq!(
            lines.try_recv().unwrap(),
            (LogLevel::Info, "G_Boot".to_string(), "started in 12 ms".to_string())
        );

        crashlog::debug!("Boot", "quirk check");
        assert_eq!(lines.try_recv().unwrap().0, LogLevel::Info);

        crashlog::error_with("Boot", "disk", &DiskFull);
        assert!(lines.try_recv().unwrap().2.contains("no space left on device"));

        crashlog::write_async(&path, "one\n");
        crashlog::write_async(&path, "two\n");
        crashlog::global().wait_idle();
        assert!(crashlog::write_sync(&path, "three\n"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\nthree\n");

        assert!(crashlog::write_sync_error(&path, &DiskFull));
        assert!(fs::read_to_string(&path).unwrap().contains("versionName = 3.1.4\n"));
    }
}
