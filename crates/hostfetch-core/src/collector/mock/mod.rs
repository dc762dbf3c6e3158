//! Mock filesystem and fixture scenarios for tests.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
