//! Ordered, comparable SDK version values.
//!
//! An [`SdkVersion`] wraps a sequence of non-negative integer components
//! written in dotted-decimal form (`10.9`, `10.15.1`). A value with no
//! components is the [`SdkVersion::USE_DEFAULT`] sentinel: it renders as the
//! empty string and stands for "whichever SDK the host provides".
//!
//! Ordering compares components left to right. When every overlapping
//! component matches, the shorter value sorts first, so `10 < 10.0`.

use crate::coarse::CoarseVersion;
use crate::error::{Result, SdkVersionError};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A dotted-decimal SDK version.
///
/// # Examples
///
/// ```
/// use macosx_sdk_version::SdkVersion;
///
/// let mavericks: SdkVersion = "10.9".parse().expect("valid version");
/// assert_eq!(mavericks, SdkVersion::V10_9);
/// assert!(mavericks < SdkVersion::V10_10);
/// assert_eq!(mavericks.to_string(), "10.9");
/// ```
#[derive(Debug, Clone)]
pub struct SdkVersion {
    components: Cow<'static, [u32]>,
}

impl SdkVersion {
    /// Sentinel meaning "no explicit version chosen".
    pub const USE_DEFAULT: Self = Self::from_static(&[]);

    pub(crate) const fn from_static(components: &'static [u32]) -> Self {
        Self {
            components: Cow::Borrowed(components),
        }
    }

    /// Build a version from explicit components.
    ///
    /// An empty list yields [`Self::USE_DEFAULT`].
    #[must_use]
    pub fn new(components: impl Into<Vec<u32>>) -> Self {
        Self {
            components: Cow::Owned(components.into()),
        }
    }

    /// Build a version from a component list that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`SdkVersionError::InvalidArgument`] when `components` is
    /// `None`.
    pub fn create(components: Option<Vec<u32>>) -> Result<Self> {
        components.map(Self::new).ok_or(SdkVersionError::InvalidArgument {
            argument: "components",
        })
    }

    /// Widen a coarse descriptor that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`SdkVersionError::InvalidArgument`] when `coarse` is `None`.
    pub fn from_coarse(coarse: Option<CoarseVersion>) -> Result<Self> {
        coarse
            .map(Self::from)
            .ok_or(SdkVersionError::InvalidArgument { argument: "coarse" })
    }

    /// Parse dotted-decimal text strictly.
    ///
    /// Every `.`-separated piece must be a base-10 non-negative integer,
    /// optionally padded with whitespace (`10. 9` parses as `10.9`).
    /// Splitting the empty string yields one empty piece, so `""` is
    /// rejected; use [`Self::USE_DEFAULT`] to express "no version".
    ///
    /// # Errors
    ///
    /// Returns [`SdkVersionError::Format`] when `text` is absent or any piece
    /// is empty or not an integer.
    pub fn parse(text: Option<&str>) -> Result<Self> {
        let Some(source) = text else {
            return Err(SdkVersionError::format("", "version text is absent"));
        };
        parse_components(source).map(Self::new)
    }

    /// Parse text without raising.
    ///
    /// Returns `(true, version)` on success and `(false, USE_DEFAULT)`
    /// otherwise. Nothing from a partially parsed input escapes.
    #[must_use]
    pub fn try_parse(text: Option<&str>) -> (bool, Self) {
        text.and_then(Self::parse_opt)
            .map_or((false, Self::USE_DEFAULT), |version| (true, version))
    }

    /// Parse text, discarding the failure reason.
    #[must_use]
    pub fn parse_opt(text: &str) -> Option<Self> {
        parse_components(text).ok().map(Self::new)
    }

    /// Return the raw components.
    #[must_use]
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Whether this is the [`Self::USE_DEFAULT`] sentinel.
    #[must_use]
    pub fn is_use_default(&self) -> bool {
        self.components.is_empty()
    }

    /// Index-mixed XOR of the components.
    fn structural_hash(&self) -> u32 {
        self.components
            .iter()
            .zip(0_u32..)
            .fold(0, |acc, (component, index)| {
                acc ^ component.rotate_left(index)
            })
    }

    fn shares_storage_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.components(), other.components())
    }
}

fn parse_components(text: &str) -> Result<Vec<u32>> {
    text.split('.')
        .map(|piece| parse_component(text, piece))
        .collect()
}

// Whitespace around a piece is tolerated; a piece with no characters is not.
fn parse_component(text: &str, piece: &str) -> Result<u32> {
    if piece.is_empty() {
        return Err(SdkVersionError::format(text, "empty component"));
    }
    piece.trim().parse::<u32>().map_err(|err| {
        SdkVersionError::format(
            text,
            format!("component \"{piece}\" is not a non-negative integer: {err}"),
        )
    })
}

impl Default for SdkVersion {
    fn default() -> Self {
        Self::USE_DEFAULT
    }
}

impl From<CoarseVersion> for SdkVersion {
    fn from(coarse: CoarseVersion) -> Self {
        Self::new([coarse.major(), coarse.minor()])
    }
}

impl FromStr for SdkVersion {
    type Err = SdkVersionError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(Some(text))
    }
}

impl TryFrom<&str> for SdkVersion {
    type Error = SdkVersionError;

    fn try_from(text: &str) -> Result<Self> {
        Self::parse(Some(text))
    }
}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.components.iter();
        if let Some(first) = components.next() {
            write!(f, "{first}")?;
        }
        for component in components {
            write!(f, ".{component}")?;
        }
        Ok(())
    }
}

impl PartialEq for SdkVersion {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || self.components() == other.components()
    }
}

impl Eq for SdkVersion {}

impl Hash for SdkVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.structural_hash());
    }
}

impl PartialOrd for SdkVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SdkVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.shares_storage_with(other) {
            return Ordering::Equal;
        }
        let (lhs, rhs) = (self.components(), other.components());
        lhs.iter()
            .zip(rhs)
            .map(|(left, right)| left.cmp(right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| lhs.len().cmp(&rhs.len()))
    }
}

impl Serialize for SdkVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SdkVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(SdkVersionVisitor)
    }
}

struct SdkVersionVisitor;

impl Visitor<'_> for SdkVersionVisitor {
    type Value = SdkVersion;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a dotted-decimal SDK version or an empty string")
    }

    // The empty string is the serialised form of `USE_DEFAULT`.
    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<SdkVersion, E> {
        if value.trim().is_empty() {
            return Ok(SdkVersion::USE_DEFAULT);
        }
        SdkVersion::from_str(value.trim()).map_err(E::custom)
    }
}
