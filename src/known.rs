//! Named macOS SDK releases and their marketing names.
//!
//! Numbered constants cover 10.0 through 10.15. Each marketing-name constant
//! is a value copy of its numbered counterpart, so `CHEETAH == V10_0` and the
//! two hash identically.

use crate::version::SdkVersion;

/// Known releases paired with their marketing names, in ascending order.
pub static KNOWN_VERSIONS: [(SdkVersion, &str); 16] = [
    (SdkVersion::V10_0, "Cheetah"),
    (SdkVersion::V10_1, "Puma"),
    (SdkVersion::V10_2, "Jaguar"),
    (SdkVersion::V10_3, "Panther"),
    (SdkVersion::V10_4, "Tiger"),
    (SdkVersion::V10_5, "Leopard"),
    (SdkVersion::V10_6, "Snow Leopard"),
    (SdkVersion::V10_7, "Lion"),
    (SdkVersion::V10_8, "Mountain Lion"),
    (SdkVersion::V10_9, "Mavericks"),
    (SdkVersion::V10_10, "Yosemite"),
    (SdkVersion::V10_11, "El Capitan"),
    (SdkVersion::V10_12, "Sierra"),
    (SdkVersion::V10_13, "High Sierra"),
    (SdkVersion::V10_14, "Mojave"),
    (SdkVersion::V10_15, "Catalina"),
];

impl SdkVersion {
    /// The 10.0 SDK (Cheetah).
    pub const V10_0: Self = Self::from_static(&[10, 0]);
    /// The 10.1 SDK (Puma).
    pub const V10_1: Self = Self::from_static(&[10, 1]);
    /// The 10.2 SDK (Jaguar).
    pub const V10_2: Self = Self::from_static(&[10, 2]);
    /// The 10.3 SDK (Panther).
    pub const V10_3: Self = Self::from_static(&[10, 3]);
    /// The 10.4 SDK (Tiger).
    pub const V10_4: Self = Self::from_static(&[10, 4]);
    /// The 10.5 SDK (Leopard).
    pub const V10_5: Self = Self::from_static(&[10, 5]);
    /// The 10.6 SDK (Snow Leopard).
    pub const V10_6: Self = Self::from_static(&[10, 6]);
    /// The 10.7 SDK (Lion).
    pub const V10_7: Self = Self::from_static(&[10, 7]);
    /// The 10.8 SDK (Mountain Lion).
    pub const V10_8: Self = Self::from_static(&[10, 8]);
    /// The 10.9 SDK (Mavericks).
    pub const V10_9: Self = Self::from_static(&[10, 9]);
    /// The 10.10 SDK (Yosemite).
    pub const V10_10: Self = Self::from_static(&[10, 10]);
    /// The 10.11 SDK (El Capitan).
    pub const V10_11: Self = Self::from_static(&[10, 11]);
    /// The 10.12 SDK (Sierra).
    pub const V10_12: Self = Self::from_static(&[10, 12]);
    /// The 10.13 SDK (High Sierra).
    pub const V10_13: Self = Self::from_static(&[10, 13]);
    /// The 10.14 SDK (Mojave).
    pub const V10_14: Self = Self::from_static(&[10, 14]);
    /// The 10.15 SDK (Catalina).
    pub const V10_15: Self = Self::from_static(&[10, 15]);

    /// Alias of [`Self::V10_0`].
    pub const CHEETAH: Self = Self::V10_0;
    /// Alias of [`Self::V10_1`].
    pub const PUMA: Self = Self::V10_1;
    /// Alias of [`Self::V10_2`].
    pub const JAGUAR: Self = Self::V10_2;
    /// Alias of [`Self::V10_3`].
    pub const PANTHER: Self = Self::V10_3;
    /// Alias of [`Self::V10_4`].
    pub const TIGER: Self = Self::V10_4;
    /// Alias of [`Self::V10_5`].
    pub const LEOPARD: Self = Self::V10_5;
    /// Alias of [`Self::V10_6`].
    pub const SNOW_LEOPARD: Self = Self::V10_6;
    /// Alias of [`Self::V10_7`].
    pub const LION: Self = Self::V10_7;
    /// Alias of [`Self::V10_8`].
    pub const MOUNTAIN_LION: Self = Self::V10_8;
    /// Alias of [`Self::V10_9`].
    pub const MAVERICKS: Self = Self::V10_9;
    /// Alias of [`Self::V10_10`].
    pub const YOSEMITE: Self = Self::V10_10;
    /// Alias of [`Self::V10_11`].
    pub const EL_CAPITAN: Self = Self::V10_11;
    /// Alias of [`Self::V10_12`].
    pub const SIERRA: Self = Self::V10_12;
    /// Alias of [`Self::V10_13`].
    pub const HIGH_SIERRA: Self = Self::V10_13;
    /// Alias of [`Self::V10_14`].
    pub const MOJAVE: Self = Self::V10_14;
    /// Alias of [`Self::V10_15`].
    pub const CATALINA: Self = Self::V10_15;
}

impl SdkVersion {
    /// Return the marketing name for a known release.
    #[must_use]
    pub fn marketing_name(&self) -> Option<&'static str> {
        let text = self.to_string();
        KNOWN_VERSIONS
            .iter()
            .find(|(known, _)| known.to_string() == text)
            .map(|(_, name)| *name)
    }

    /// Look up a known release by its exact marketing name.
    ///
    /// # Examples
    ///
    /// ```
    /// use macosx_sdk_version::SdkVersion;
    ///
    /// assert_eq!(
    ///     SdkVersion::from_marketing_name("El Capitan"),
    ///     Some(SdkVersion::V10_11),
    /// );
    /// assert_eq!(SdkVersion::from_marketing_name("Big Sur"), None);
    /// ```
    #[must_use]
    pub fn from_marketing_name(name: &str) -> Option<Self> {
        KNOWN_VERSIONS
            .iter()
            .find(|(_, known)| *known == name)
            .map(|(version, _)| version.clone())
    }
}

/// Return the marketing name for `version`, or `""` when it is not a known
/// release.
///
/// The lookup matches on the rendered text, so `10.9.0` and the
/// [`SdkVersion::USE_DEFAULT`] sentinel both yield `""`.
#[must_use]
pub fn version_name(version: &SdkVersion) -> &'static str {
    version.marketing_name().unwrap_or_default()
}
