//! Native CLI support for the ktjs binary.
//!
//! The binary reads a JSON manifest of pre-lowered files, runs the package
//! declaration pass over them and prints the generated JavaScript.

pub mod args;
pub mod config;
pub mod driver;
pub mod manifest;
pub mod reporter;
pub mod tracing_config;

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;
#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod driver_tests;
#[cfg(test)]
#[path = "../tests/manifest_tests.rs"]
mod manifest_tests;
#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod reporter_tests;
