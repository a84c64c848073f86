//! SeaORM entity definitions for the squadup database schema.
//!
//! Reference lists (group captains/members, event hosts/groups/attendance) are
//! stored in one table per list, one row per position, keyed by the owning
//! document. Referenced ids are plain strings so unknown ids round-trip.

pub mod prelude;

pub mod event;
pub mod event_attendee;
pub mod event_group;
pub mod event_host;
pub mod group;
pub mod group_captain;
pub mod group_member;
pub mod profile;
pub mod session;
pub mod user;
