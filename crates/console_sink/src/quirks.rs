use std::collections::HashMap;

use crate::LogLevel;

/// Huawei models whose firmware drops debug output; debug lines are sent as
/// info instead.
pub const INFO_ONLY_MODELS: [&str; 2] = ["GEM-703L", "H60-L11"];

/// Per-device level redirects, keyed by the exact device model string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceQuirks {
    // model -> (requested level -> emitted level)
    redirects: HashMap<String, HashMap<LogLevel, LogLevel>>,
}

impl DeviceQuirks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: debug becomes info on [`INFO_ONLY_MODELS`].
    pub fn stock() -> Self {
        INFO_ONLY_MODELS.iter().fold(Self::new(), |quirks, model| {
            quirks.redirect(*model, LogLevel::Debug, LogLevel::Info)
        })
    }

    pub fn redirect(mut self, model: impl Into<String>, from: LogLevel, to: LogLevel) -> Self {
        self.insert(model, from, to);
        self
    }

    pub fn insert(&mut self, model: impl Into<String>, from: LogLevel, to: LogLevel) {
        self.redirects.entry(model.into()).or_default().insert(from, to);
    }

    pub fn resolve(&self, model: &str, level: LogLevel) -> LogLevel {
        self.redirects
            .get(model)
            .and_then(|levels| levels.get(&level))
            .copied()
            .unwrap_or(level)
    }

    /// Number of redirect rules across all models.
    pub fn len(&self) -> usize {
        self.redirects.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.redirects.is_empty()
    }
}
