//! macOS SDK version values for build-configuration tooling.
//!
//! [`SdkVersion`] is an ordered, hashable dotted-decimal version with a
//! [`SdkVersion::USE_DEFAULT`] sentinel meaning "use the newest installed
//! SDK". The crate also carries the 10.0 to 10.15 release constants with
//! their marketing names, resolution against an injected [`InstalledSdks`]
//! provider, and TOML-backed [`SdkSettings`] with layered selection.
//!
//! # Modules
//!
//! - [`coarse`] - Two-component `major.minor` descriptor
//! - [`config`] - TOML build settings
//! - [`error`] - Error types
//! - [`known`] - Named releases and marketing-name lookup
//! - [`resolve`] - Sentinel resolution against installed SDKs
//! - [`selection`] - Layered choice of the SDK a build targets
//! - [`version`] - The `SdkVersion` value type

pub mod coarse;
pub mod config;
pub mod error;
pub mod known;
pub mod resolve;
pub mod selection;
pub mod version;

pub use coarse::CoarseVersion;
pub use config::{ConfigError, SdkSettings};
pub use error::{Result, SdkVersionError};
pub use known::{KNOWN_VERSIONS, version_name};
pub use resolve::InstalledSdks;
pub use selection::{
    SDK_VERSION_ENV, SdkSelection, SdkSource, SelectionError, resolve_sdk, resolve_sdk_from_env,
};
pub use version::SdkVersion;
