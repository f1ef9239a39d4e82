#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDateTime;
    use crossbeam::channel::{unbounded, Receiver, Sender};
    use console_sink::error::ConsoleError;
    use console_sink::{ConsoleSink, ConsoleTarget, LogLevel};
    use env_snapshot::error::SnapshotError;
    use env_snapshot::{AppContext, EnvironmentSnapshot, PropertyTable, TIME_FORMAT};

    // Mock implementation of ConsoleTarget for testing
    struct MockConsole {
        sender: Sender<(LogLevel, String, String)>,
    }

    impl ConsoleTarget for MockConsole {
        fn println(&self, level: LogLevel, tag: &str, message: &str) -> Result<i32, ConsoleError> {
            let _ = self.sender.send((level, tag.to_string(), message.to_string()));
            Ok(1)
        }
    }

    fn mock_console() -> (ConsoleSink, Receiver<(LogLevel, String, String)>) {
        let (sender, receiver) = unbounded();
        (ConsoleSink::new(Arc::new(MockConsole { sender })), receiver)
    }

    fn sample_context() -> AppContext {
        AppContext::new("com.example.app")
            .with_version("1.2.3")
            .with_properties(
                PropertyTable::new()
                    .with_value("MODEL", "GEM-703L")
                    .with_value("BRAND", "HUAWEI")
                    .with("SERIAL", || None),
            )
    }

    #[test]
    fn test_snapshot_renders_all_sections() {
        let (console, reports) = mock_console();
        let context = sample_context();
        let snapshot = EnvironmentSnapshot::capture(Some(&context), &console);
        let text = snapshot.to_string();

        let expected_tail = "versionName = 1.2.3\nMODEL = GEM-703L\nBRAND = HUAWEI\nSERIAL = \n\n";
        assert!(text.starts_with("time = "));
        assert!(text.ends_with(expected_tail), "unexpected snapshot: {text:?}");
        assert!(reports.try_recv().is_err());
    }

    #[test]
    fn test_snapshot_time_format() {
        let (console, _reports) = mock_console();
        let snapshot = EnvironmentSnapshot::capture(Some(&sample_context()), &console);
        assert!(NaiveDateTime::parse_from_str(&snapshot.time, TIME_FORMAT).is_ok());
        assert_eq!(snapshot.time.len(), "2024-05-01 12:00:00.000".len());
    }

    #[test]
    fn test_property_order_is_stable() {
        let (console, _reports) = mock_console();
        let context = sample_context();
        let first = EnvironmentSnapshot::capture(Some(&context), &console);
        let second = EnvironmentSnapshot::capture(Some(&context), &console);
        assert_eq!(first.properties, second.properties);
    }

    #[test]
    fn test_missing_context_degrades() {
        let (console, reports) = mock_console();
        let snapshot = EnvironmentSnapshot::capture(None, &console);

        assert_eq!(snapshot.version_name, "");
        assert!(snapshot.properties.is_empty());
        assert!(snapshot.to_string().contains("versionName = \n"));
        assert_eq!(reports.try_recv().unwrap().0, LogLevel::Warn);
    }

    #[test]
    fn test_failed_version_lookup_degrades() {
        let (console, reports) = mock_console();
        let context = AppContext::new("com.example.app")
            .with_version_resolver(|package| Err(SnapshotError::VersionLookup {
                package: package.to_string(),
                reason: "package manager gone".to_string(),
            }))
            .with_properties(PropertyTable::new().with_value("MODEL", "X"));

        let snapshot = EnvironmentSnapshot::capture(Some(&context), &console);
        assert_eq!(snapshot.version_name, "");
        assert_eq!(snapshot.properties, vec![("MODEL".to_string(), "X".to_string())]);

        let (level, tag, message) = reports.try_recv().unwrap();
        assert_eq!(level, LogLevel::Error);
        assert_eq!(tag, "crashlog");
        assert!(message.contains("package manager gone"));
    }

    #[test]
    fn test_panicking_version_resolver_degrades() {
        let (console, reports) = mock_console();
        let context = AppContext::new("com.example.app")
            .with_version_resolver(|_| panic!("package manager crashed"))
            .with_properties(PropertyTable::new().with_value("MODEL", "X"));

        assert!(matches!(
            context.version_name(),
            Err(SnapshotError::ResolverPanicked(ref package)) if package == "com.example.app"
        ));
        let snapshot = EnvironmentSnapshot::capture(Some(&context), &console);
        assert_eq!(snapshot.version_name, "");
        assert_eq!(snapshot.properties, vec![("MODEL".to_string(), "X".to_string())]);
        assert!(snapshot.to_string().contains("versionName = \nMODEL = X\n"));

        let (level, tag, message) = reports.try_recv().unwrap();
        assert_eq!(level, LogLevel::Error);
        assert_eq!(tag, "crashlog");
        assert!(message.starts_with("version_name()"));
        assert!(message.contains("panicked"));
    }

    #[test]
    fn test_missing_property_source_degrades() {
        let (console, reports) = mock_console();
        let context = AppContext::new("com.example.app").with_version("2.0");

        let snapshot = EnvironmentSnapshot::capture(Some(&context), &console);
        assert_eq!(snapshot.version_name, "2.0");
        assert!(snapshot.properties.is_empty());
        assert!(reports.try_recv().unwrap().2.starts_with("build_properties()"));
    }

    #[test]
    fn test_panicking_accessor_yields_empty_value() {
        let table = PropertyTable::new()
            .with("BROKEN", || panic!("no such field"))
            .with_value("OK", "yes");
        assert_eq!(
            table.resolve(),
            vec![("BROKEN".to_string(), String::new()), ("OK".to_string(), "yes".to_string())]
        );
    }

    #[test]
    fn test_host_properties() {
        let table = PropertyTable::host();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, ["OS", "ARCH", "FAMILY", "PID", "CPUS", "EXE"]);

        let resolved = table.resolve();
        assert_eq!(resolved[0].1, std::env::consts::OS);
        assert_eq!(resolved[3].1, std::process::id().to_string());
    }
}
