//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own module with a `Factory` struct
//! for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let profile = factory::profile::create_profile(&db, &user.id).await?;
//!
//!     // A group captained by a freshly created profile
//!     let (user, profile, group) = factory::helpers::create_group_with_captain(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let group = factory::group::GroupFactory::new(&db)
//!     .team_name("Sneaky Sneks")
//!     .captains(vec![profile.id.clone()])
//!     .members(vec![profile.id.clone()])
//!     .build()
//!     .await?;
//! ```

pub mod event;
pub mod group;
pub mod helpers;
pub mod profile;
pub mod session;
pub mod user;

pub use event::create_event;
pub use group::create_group;
pub use profile::create_profile;
pub use session::create_session;
pub use user::create_user;
