use std::convert::Infallible;
use std::str::FromStr;

use macosx_sdk_version::SdkVersion;

fn unquote(input: &str) -> &str {
    input
        .trim()
        .trim_matches(|candidate| matches!(candidate, '"' | '\''))
}

/// Raw text supplied via a behaviour-driven test step, with quotes removed.
#[derive(Clone, Debug)]
pub struct StepText {
    raw: String,
}

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            raw: unquote(input).to_owned(),
        })
    }
}

impl StepText {
    /// Consumes the step value, yielding the parsed string.
    pub fn into_inner(self) -> String {
        self.raw
    }

    /// Parses the text as a version, panicking on malformed fixtures.
    pub fn version(&self) -> SdkVersion {
        SdkVersion::from_str(&self.raw)
            .unwrap_or_else(|error| panic!("step version `{}` must parse: {error}", self.raw))
    }
}

/// A comma-separated list of versions supplied via a step.
#[derive(Clone, Debug)]
pub struct StepVersions(Vec<SdkVersion>);

impl FromStr for StepVersions {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let versions = unquote(input)
            .split(',')
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| {
                SdkVersion::from_str(chunk)
                    .unwrap_or_else(|error| panic!("failed to parse `{chunk}`: {error}"))
            })
            .collect();
        Ok(Self(versions))
    }
}

impl StepVersions {
    /// Consumes the step value, yielding the parsed versions.
    pub fn into_inner(self) -> Vec<SdkVersion> {
        self.0
    }
}
