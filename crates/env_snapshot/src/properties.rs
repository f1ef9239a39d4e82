use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

pub type PropertyAccessor = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Named build properties, each read through its accessor when a snapshot is
/// taken. Entries keep their insertion order.
#[derive(Clone, Default)]
pub struct PropertyTable {
    entries: Vec<(String, PropertyAccessor)>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Properties the Rust standard library can report about the host.
    pub fn host() -> Self {
        PropertyTable::new()
            .with_value("OS", std::env::consts::OS)
            .with_value("ARCH", std::env::consts::ARCH)
            .with_value("FAMILY", std::env::consts::FAMILY)
            .with_value("PID", std::process::id().to_string())
            .with("CPUS", || {
                std::thread::available_parallelism()
                    .ok()
                    .map(|cpus| cpus.to_string())
            })
            .with("EXE", || {
                std::env::current_exe()
                    .ok()
                    .map(|exe| exe.display().to_string())
            })
    }

    pub fn with<F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.entries.push((name.into(), Arc::new(accessor)));
        self
    }

    pub fn with_value(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        self.with(name, move || Some(value.clone()))
    }

    /// Reads every property. An accessor that yields nothing or panics
    /// contributes an empty value.
    pub fn resolve(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(name, accessor)| {
                let value = panic::catch_unwind(AssertUnwindSafe(|| accessor()))
                    .ok()
                    .flatten()
                    .unwrap_or_default();
                (name.clone(), value)
            })
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PropertyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
