//! Common test utilities for ytmfetch integration tests

#[allow(dead_code)]
pub mod assertions;
#[allow(dead_code)]
pub mod engine;
#[allow(dead_code)]
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use engine::*;
#[allow(unused_imports)]
pub use fixtures::*;
