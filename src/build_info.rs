//! Compile-time build metadata exposed to CLI surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("FOLIO_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("FOLIO_BUILD_TIMESTAMP");

/// Help trailer block that surfaces build metadata in `folio --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("FOLIO_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("FOLIO_BUILD_TIMESTAMP")
);

/// `folio --version` body; clap prefixes the binary name.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("FOLIO_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("FOLIO_BUILD_TIMESTAMP")
);
