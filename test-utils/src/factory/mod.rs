//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has a `*Factory` builder for customization
//! and a `create_*` shorthand for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let trainer = factory::trainer::create_trainer(&db).await?;
//!
//! let class = factory::fitness_class::FitnessClassFactory::new(&db)
//!     .trainer_id(Some(trainer.id))
//!     .price(2_500)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` / `admin` - accounts
//! - `trainer`, `fitness_class`, `program`, `membership` - studio catalog
//! - `order` - purchases
//! - `notification` - user or admin notifications
//! - `otp` - verification codes
//! - `helpers` - unique id counter and multi-entity helpers

pub mod admin;
pub mod fitness_class;
pub mod helpers;
pub mod membership;
pub mod notification;
pub mod order;
pub mod otp;
pub mod program;
pub mod trainer;
pub mod user;

pub use admin::create_admin;
pub use fitness_class::create_class;
pub use membership::create_membership;
pub use order::create_order;
pub use program::create_program;
pub use trainer::create_trainer;
pub use user::create_user;
