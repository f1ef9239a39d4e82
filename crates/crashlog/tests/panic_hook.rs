mod utils;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::panic;
    use std::thread;

    use crashlog::{install_panic_hook, CrashLog};
    use super::utils::*;

    #[test]
    fn test_panic_writes_crash_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crash.log");
        let (config, _lines) = test_config();
        let log: &'static CrashLog = Box::leak(Box::new(CrashLog::new(config)));

        install_panic_hook(log, &path);
        let outcome = thread::Builder::new()
            .name("doomed".to_string())
            .spawn(|| panic!("reactor core breach"))
            .unwrap()
            .join();
        let _ = panic::take_hook();

        assert!(outcome.is_err());
        let report = fs::read_to_string(&path).unwrap();
        assert!(report.starts_with("time = "));
        assert!(report.contains("versionName = 3.1.4\n"));
        assert!(report.contains("thread 'doomed' panicked at "));
        assert!(report.contains("reactor core breach"));
    }
}
