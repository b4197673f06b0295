//! Behaviour-driven coverage for parsing, ordering, and naming SDK versions.

mod support;

use macosx_sdk_version::{SdkVersion, SdkVersionError, version_name};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use support::steps::StepText;

#[derive(Debug, Default)]
struct VersionWorld {
    text: RefCell<Option<String>>,
    parsed: RefCell<Option<Result<SdkVersion, SdkVersionError>>>,
}

impl VersionWorld {
    fn set_text(&self, text: Option<String>) {
        self.text.replace(text);
    }

    fn parse(&self) {
        let text = self.text.borrow();
        self.parsed
            .replace(Some(SdkVersion::parse(text.as_deref())));
    }

    fn parsed(&self) -> Result<SdkVersion, SdkVersionError> {
        self.parsed
            .borrow()
            .as_ref()
            .cloned()
            .unwrap_or_else(|| panic!("parse result must be recorded"))
    }

    fn version(&self) -> SdkVersion {
        self.parsed()
            .unwrap_or_else(|error| panic!("parsing should succeed: {error}"))
    }
}

#[fixture]
fn world() -> VersionWorld {
    VersionWorld::default()
}

#[given("the version text {text}")]
fn given_text(world: &VersionWorld, text: StepText) {
    world.set_text(Some(text.into_inner()));
}

#[given("empty version text")]
fn given_empty_text(world: &VersionWorld) {
    world.set_text(Some(String::new()));
}

#[given("no version text")]
fn given_no_text(world: &VersionWorld) {
    world.set_text(None);
}

#[when("I parse the text strictly")]
fn when_parse(world: &VersionWorld) {
    world.parse();
}

#[then("parsing succeeds")]
fn then_parse_succeeds(world: &VersionWorld) {
    assert!(world.parsed().is_ok());
}

#[then("the version renders as {expected}")]
fn then_renders_as(world: &VersionWorld, expected: StepText) {
    assert_eq!(world.version().to_string(), expected.into_inner());
}

#[then("parsing fails with a format error")]
fn then_format_error(world: &VersionWorld) {
    let error = world.parsed().expect_err("parsing should fail");
    assert!(matches!(error, SdkVersionError::Format { .. }));
}

#[then("lenient parsing reports failure with the default sentinel")]
fn then_lenient_failure(world: &VersionWorld) {
    let text = world.text.borrow();
    let (ok, value) = SdkVersion::try_parse(text.as_deref());
    assert!(!ok);
    assert_eq!(value, SdkVersion::USE_DEFAULT);
}

#[then("the version is less than {other}")]
fn then_less_than(world: &VersionWorld, other: StepText) {
    assert!(world.version() < other.version());
}

#[then("the marketing name is {name}")]
fn then_marketing_name(world: &VersionWorld, name: StepText) {
    assert_eq!(version_name(&world.version()), name.into_inner());
}

#[then("the version has no marketing name")]
fn then_no_marketing_name(world: &VersionWorld) {
    assert_eq!(version_name(&world.version()), "");
}

#[scenario(path = "tests/features/sdk_version.feature", index = 0)]
fn scenario_round_trip(world: VersionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sdk_version.feature", index = 1)]
fn scenario_empty_text(world: VersionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sdk_version.feature", index = 2)]
fn scenario_absent_text(world: VersionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sdk_version.feature", index = 3)]
fn scenario_non_numeric_component(world: VersionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sdk_version.feature", index = 4)]
fn scenario_shorter_sorts_first(world: VersionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sdk_version.feature", index = 5)]
fn scenario_known_marketing_name(world: VersionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sdk_version.feature", index = 6)]
fn scenario_unknown_marketing_name(world: VersionWorld) {
    let _ = world;
}
