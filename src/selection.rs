//! Choosing the SDK a build should target.
//!
//! A caller may name an SDK explicitly, the environment may override it
//! through `MACOSX_SDK_VERSION`, and [`SdkSettings`] may pin one. When none of
//! those apply the [`SdkVersion::USE_DEFAULT`] sentinel is resolved against
//! the installed SDKs. The outcome records which of these won.

use log::{debug, warn};
use thiserror::Error;

use crate::config::SdkSettings;
use crate::resolve::InstalledSdks;
use crate::version::SdkVersion;

/// Environment variable consulted for an SDK override.
pub const SDK_VERSION_ENV: &str = "MACOSX_SDK_VERSION";

/// Where a selected SDK version came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SdkSource {
    /// Supplied by the caller.
    Explicit,
    /// Read from `MACOSX_SDK_VERSION`.
    Environment,
    /// Taken from [`SdkSettings::sdk_version`].
    Configuration,
    /// The newest SDK reported by the installed-SDK provider.
    Installed,
}

/// A selected SDK version and its origin.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SdkSelection {
    /// The chosen version. Only the sentinel when the source is
    /// [`SdkSource::Installed`] and nothing is installed.
    pub version: SdkVersion,
    /// Where `version` came from.
    pub source: SdkSource,
}

/// Errors raised by [`resolve_sdk`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The selected SDK is older than [`SdkSettings::minimum`].
    #[error("SDK version {selected} is older than the required minimum {minimum}")]
    BelowMinimum {
        /// The version chosen by selection.
        selected: SdkVersion,
        /// The configured lower bound.
        minimum: SdkVersion,
    },
}

/// Parse an override, treating blank text as "not given".
fn parse_override(origin: &str, raw: Option<&str>) -> Option<SdkVersion> {
    let text = raw.map(str::trim).filter(|text| !text.is_empty())?;
    let parsed = SdkVersion::parse_opt(text);
    if parsed.is_none() {
        warn!(target: "sdk::selection", "skipping unparsable {origin} `{text}`");
    }
    parsed
}

/// Select an SDK version for a build.
///
/// The first usable entry wins:
///
/// 1. `explicit`;
/// 2. `environment`, the value of `MACOSX_SDK_VERSION`;
/// 3. [`SdkSettings::sdk_version`] unless it is the sentinel;
/// 4. the newest SDK reported by `installed`.
///
/// Blank overrides are ignored. Unparsable ones are ignored with a warning.
///
/// # Errors
///
/// Returns [`SelectionError::BelowMinimum`] when the chosen version is older
/// than [`SdkSettings::minimum`]. A selection still at the sentinel is not
/// checked.
pub fn resolve_sdk(
    explicit: Option<&str>,
    environment: Option<&str>,
    settings: &SdkSettings,
    installed: &(impl InstalledSdks + ?Sized),
) -> Result<SdkSelection, SelectionError> {
    let (version, source) = if let Some(version) = parse_override("explicit SDK", explicit) {
        (version, SdkSource::Explicit)
    } else if let Some(version) = parse_override(SDK_VERSION_ENV, environment) {
        (version, SdkSource::Environment)
    } else if !settings.sdk_version.is_use_default() {
        (settings.sdk_version.clone(), SdkSource::Configuration)
    } else {
        (SdkVersion::get_default(installed), SdkSource::Installed)
    };

    let too_old = |minimum: &&SdkVersion| !version.is_use_default() && version < **minimum;
    if let Some(minimum) = settings.minimum().filter(too_old) {
        return Err(SelectionError::BelowMinimum {
            selected: version,
            minimum: minimum.clone(),
        });
    }

    debug!(target: "sdk::selection", "selected SDK `{version}` ({source:?})");
    Ok(SdkSelection { version, source })
}

/// [`resolve_sdk`] with the override read from `MACOSX_SDK_VERSION`.
///
/// # Errors
///
/// Propagates [`resolve_sdk`] errors.
pub fn resolve_sdk_from_env(
    explicit: Option<&str>,
    settings: &SdkSettings,
    installed: &(impl InstalledSdks + ?Sized),
) -> Result<SdkSelection, SelectionError> {
    let environment = std::env::var(SDK_VERSION_ENV).ok();
    resolve_sdk(explicit, environment.as_deref(), settings, installed)
}
