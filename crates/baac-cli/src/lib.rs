//! Library components of the BAAC normalizer CLI.

pub mod logging;
pub mod runner;
pub mod settings;
