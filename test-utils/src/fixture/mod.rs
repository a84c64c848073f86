//! Request payload fixtures.
//!
//! JSON bodies shaped the way API clients send them, for tests that drive the HTTP
//! router directly.

pub mod payload;
