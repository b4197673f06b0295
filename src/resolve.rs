//! Resolution of the [`SdkVersion::USE_DEFAULT`] sentinel against the SDKs
//! installed on the host.
//!
//! Discovery is injected through [`InstalledSdks`] so build tooling can back
//! it with whatever probing it performs, and tests can substitute a fixed list.

use crate::version::SdkVersion;
use log::debug;

/// Source of the SDK versions installed on the host.
#[cfg_attr(test, mockall::automock)]
pub trait InstalledSdks {
    /// Return the installed SDK versions in ascending order.
    ///
    /// Callers take the last element as the newest SDK and do not re-sort.
    fn installed_sdk_versions(&self) -> Vec<SdkVersion>;
}

impl InstalledSdks for [SdkVersion] {
    fn installed_sdk_versions(&self) -> Vec<SdkVersion> {
        self.to_vec()
    }
}

impl InstalledSdks for Vec<SdkVersion> {
    fn installed_sdk_versions(&self) -> Vec<SdkVersion> {
        self.clone()
    }
}

impl SdkVersion {
    /// Return the newest installed SDK, or [`Self::USE_DEFAULT`] when none is
    /// installed.
    ///
    /// # Examples
    ///
    /// ```
    /// use macosx_sdk_version::SdkVersion;
    ///
    /// let installed = vec![SdkVersion::V10_13, SdkVersion::V10_14];
    /// assert_eq!(SdkVersion::get_default(&installed), SdkVersion::MOJAVE);
    /// ```
    #[must_use]
    pub fn get_default(sdks: &(impl InstalledSdks + ?Sized)) -> Self {
        let mut installed = sdks.installed_sdk_versions();
        let count = installed.len();
        let Some(newest) = installed.pop() else {
            debug!(target: "sdk::resolve", "no SDKs installed; keeping the default sentinel");
            return Self::USE_DEFAULT;
        };
        debug!(
            target: "sdk::resolve",
            "{count} SDK(s) installed; newest is {newest}",
        );
        newest
    }

    /// Replace the [`Self::USE_DEFAULT`] sentinel with the newest installed
    /// SDK; any other value is returned unchanged.
    #[must_use]
    pub fn resolve_if_default(&self, sdks: &(impl InstalledSdks + ?Sized)) -> Self {
        if self.is_use_default() {
            Self::get_default(sdks)
        } else {
            self.clone()
        }
    }
}
