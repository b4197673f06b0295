//! Two-component (major, minor) version descriptor.
//!
//! Host tooling often reports versions as a fixed major/minor pair. This
//! newtype carries that pair until it is widened into an [`SdkVersion`].
//!
//! [`SdkVersion`]: crate::SdkVersion

use crate::error::{Result, SdkVersionError};
use std::fmt;
use std::str::FromStr;

/// A coarse `major.minor` version descriptor.
///
/// # Examples
///
/// ```
/// use macosx_sdk_version::CoarseVersion;
///
/// let coarse: CoarseVersion = "10.9".parse().expect("valid coarse version");
/// assert_eq!(coarse.major(), 10);
/// assert_eq!(coarse.minor(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoarseVersion {
    major: u32,
    minor: u32,
}

impl CoarseVersion {
    /// Build a descriptor from its two parts.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Return the major part.
    #[must_use]
    pub const fn major(self) -> u32 {
        self.major
    }

    /// Return the minor part.
    #[must_use]
    pub const fn minor(self) -> u32 {
        self.minor
    }
}

impl From<(u32, u32)> for CoarseVersion {
    fn from((major, minor): (u32, u32)) -> Self {
        Self::new(major, minor)
    }
}

impl FromStr for CoarseVersion {
    type Err = SdkVersionError;

    fn from_str(text: &str) -> Result<Self> {
        let Some((major, minor)) = text.split_once('.') else {
            return Err(SdkVersionError::format(
                text,
                "expected exactly two components",
            ));
        };
        Ok(Self::new(parse_part(text, major)?, parse_part(text, minor)?))
    }
}

fn parse_part(text: &str, part: &str) -> Result<u32> {
    part.parse::<u32>().map_err(|err| {
        SdkVersionError::format(text, format!("component \"{part}\" is invalid: {err}"))
    })
}

impl fmt::Display for CoarseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
