//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation that needs stored state, such as unique emails
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Population**: Expanding profile references on read (`populate`)
//!
//! Authentication and captain checks happen before a service is called; the
//! authenticated user is passed in explicitly where a service needs it.

pub mod auth;
pub mod event;
pub mod group;
pub mod populate;
pub mod profile;
pub mod user;
