// Shared test fixtures. Compiled only for the crate's own unit tests.

pub mod dates;
pub mod patterns;
