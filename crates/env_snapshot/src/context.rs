use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::{error::SnapshotError, PropertyTable};

pub type VersionResolver = Arc<dyn Fn(&str) -> Result<String, SnapshotError> + Send + Sync>;

/// What the host application knows about itself: its package name, how to
/// look up its version and which build properties to report.
#[derive(Clone)]
pub struct AppContext {
    package_name: String,
    version: Option<VersionResolver>,
    properties: Option<PropertyTable>,
}

impl AppContext {
    pub fn new(package_name: impl Into<String>) -> Self {
        AppContext {
            package_name: package_name.into(),
            version: None,
            properties: None,
        }
    }

    pub fn with_version(self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.with_version_resolver(move |_| Ok(version.clone()))
    }

    /// The resolver receives the package name and is called on every snapshot.
    pub fn with_version_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str) -> Result<String, SnapshotError> + Send + Sync + 'static,
    {
        self.version = Some(Arc::new(resolver));
        self
    }

    pub fn with_properties(mut self, properties: PropertyTable) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// A resolver that panics is reported as [`SnapshotError::ResolverPanicked`].
    pub fn version_name(&self) -> Result<String, SnapshotError> {
        let resolver = self
            .version
            .as_ref()
            .ok_or_else(|| SnapshotError::NoVersionSource(self.package_name.clone()))?;

        panic::catch_unwind(AssertUnwindSafe(|| resolver(self.package_name.as_str())))
            .unwrap_or_else(|_| Err(SnapshotError::ResolverPanicked(self.package_name.clone())))
    }

    pub fn properties(&self) -> Result<&PropertyTable, SnapshotError> {
        self.properties.as_ref().ok_or(SnapshotError::NoPropertySource)
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("package_name", &self.package_name)
            .field("has_version", &self.version.is_some())
            .field("properties", &self.properties)
            .finish()
    }
}
