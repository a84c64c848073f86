//! HTTP request handlers.
//!
//! Controllers authenticate through `AuthGuard`, convert DTOs to params, call a
//! service and convert the result back to a DTO. Every handler carries a
//! `#[utoipa::path]` annotation and is registered in `router`.

pub mod auth;
pub mod event;
pub mod group;
pub mod health;
pub mod profile;
pub mod user;

#[cfg(test)]
mod test;
