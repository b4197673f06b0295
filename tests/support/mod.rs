//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes the `steps` helpers (for example `StepVersions`) that parse version
//! parameters in BDD steps so scenarios can feed consistent values into the
//! parsing, resolution, and selection flow.
pub mod steps;
