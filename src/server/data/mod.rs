//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Writes that touch a document row and its reference list rows run inside a single
//! transaction.

pub mod event;
pub mod group;
pub mod profile;
pub mod session;
pub mod user;

#[cfg(test)]
mod test;
