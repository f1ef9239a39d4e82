use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("no version source registered for '{0}'")]
    NoVersionSource(String),

    #[error("version lookup for '{package}' failed: {reason}")]
    VersionLookup {
        package: String,
        reason: String,
    },

    #[error("version resolver for '{0}' panicked")]
    ResolverPanicked(String),

    #[error("build property source not found")]
    NoPropertySource,
}
