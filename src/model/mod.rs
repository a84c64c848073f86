//! JSON data transfer objects shared by the HTTP API.
//!
//! Field names follow the wire format clients already speak: document ids are `_id`,
//! version counters are `__v` and compound names are camelCase.

pub mod api;
pub mod auth;
pub mod event;
pub mod group;
pub mod profile;
pub mod reference;
pub mod user;
