use std::fmt::{self, Display};

use chrono::Local;
use console_sink::{ConsoleSink, INTERNAL_TAG};

use crate::AppContext;

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Process and device metadata prepended to crash reports.
///
/// Renders as
///
/// ```text
/// time = 2024-05-01 12:00:00.000
/// versionName = 1.2.3
/// OS = linux
/// ...
///
/// ```
///
/// Any piece that cannot be read is left empty and reported through the
/// console; capturing never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    pub time: String,
    pub version_name: String,
    pub properties: Vec<(String, String)>,
}

impl EnvironmentSnapshot {
    pub fn capture(context: Option<&AppContext>, console: &ConsoleSink) -> Self {
        let time = Local::now().format(TIME_FORMAT).to_string();

        let Some(context) = context else {
            console.warn(
                INTERNAL_TAG,
                "environment_snapshot(): no app context, metadata unavailable",
            );
            return EnvironmentSnapshot {
                time,
                version_name: String::new(),
                properties: Vec::new(),
            };
        };

        let version_name = context.version_name().unwrap_or_else(|err| {
            console.error_with(INTERNAL_TAG, "version_name()", &err);
            String::new()
        });

        let properties = match context.properties() {
            Ok(table) => table.resolve(),
            Err(err) => {
                console.error_with(INTERNAL_TAG, "build_properties()", &err);
                Vec::new()
            }
        };

        EnvironmentSnapshot {
            time,
            version_name,
            properties,
        }
    }
}

impl Display for EnvironmentSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "time = {}", self.time)?;
        writeln!(f, "versionName = {}", self.version_name)?;
        for (name, value) in &self.properties {
            writeln!(f, "{} = {}", name, value)?;
        }
        writeln!(f)
    }
}
