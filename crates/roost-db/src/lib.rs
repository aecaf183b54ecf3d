//! Roost DB - Database abstractions
//!
//! SQLx-based storage layer for the roost auth core. Repository traits are
//! the seam the core programs against; `pg` holds the PostgreSQL
//! implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use roost_db::{create_pool, Repositories};
//!
//! let pool = create_pool("postgres://localhost/roost").await?;
//! let repos = Repositories::new(pool);
//!
//! let user = repos.users.find_by_email("user@example.com").await?;
//! ```

pub mod error;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pg::Repositories;
pub use pool::{create_pool, DbPool};
pub use repo::*;
