//! Build settings naming the SDK a project targets.
//!
//! Settings live in a TOML table such as:
//!
//! ```toml
//! sdk_version = "10.14"
//! minimum_sdk_version = "10.9"
//! ```
//!
//! Omitting `sdk_version`, or setting it to `""`, leaves the value at
//! [`SdkVersion::USE_DEFAULT`] so that selection falls through to the newest
//! installed SDK.

use crate::version::SdkVersion;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading [`SdkSettings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML source could not be deserialised.
    #[error("invalid SDK settings: {0}")]
    Toml(#[from] toml::de::Error),
}

/// SDK settings for a build.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SdkSettings {
    /// Requested SDK version; the sentinel when unset.
    pub sdk_version: SdkVersion,
    /// Oldest SDK the build accepts, if any.
    pub minimum_sdk_version: Option<SdkVersion>,
}

impl SdkSettings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] when the text is not valid TOML, names an
    /// unknown key, or holds a malformed version string.
    ///
    /// # Examples
    ///
    /// ```
    /// use macosx_sdk_version::{SdkSettings, SdkVersion};
    ///
    /// let settings = SdkSettings::from_toml("sdk_version = \"10.13\"\n")
    ///     .expect("valid settings");
    /// assert_eq!(settings.sdk_version, SdkVersion::HIGH_SIERRA);
    /// ```
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load settings using the supplied loader.
    ///
    /// Tests inject a stub here instead of reading files.
    #[must_use]
    pub fn load_with<F>(loader: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        loader()
    }

    /// Returns the configured minimum, ignoring a blank entry.
    #[must_use]
    pub fn minimum(&self) -> Option<&SdkVersion> {
        self.minimum_sdk_version
            .as_ref()
            .filter(|minimum| !minimum.is_use_default())
    }
}
