//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
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
//!     let camper = factory::create_camper(&db).await?;
//!     let activity = factory::create_activity(&db).await?;
//!     let signup = factory::create_signup(&db, camper.id, activity.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `camper` - Create camper entities
//! - `activity` - Create activity entities
//! - `signup` - Create signup entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod activity;
pub mod camper;
pub mod helpers;
pub mod signup;

pub use activity::create_activity;
pub use camper::create_camper;
pub use helpers::create_signup_with_dependencies;
pub use signup::create_signup;
