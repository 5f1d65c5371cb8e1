//! # tp-db
//!
//! Database layer for Team Planner.
//!
//! This crate provides PostgreSQL database access using SQLx, including:
//!
//! - Connection pool management and embedded migrations
//! - Repository pattern for CRUD operations
//! - Repositories for projects, developers and tasks
//! - An in-memory store with the same semantics, for tests and local runs
//!
//! ## Example
//!
//! ```ignore
//! use tp_db::{Database, TaskRepository, TaskStore};
//!
//! let db = Database::connect(&config.database).await?;
//! db.migrate().await?;
//!
//! let tasks = TaskRepository::new(db.pool().clone());
//! let open = tasks.find_by_project(1).await?;
//! ```

pub mod developers;
pub mod memory;
pub mod pool;
pub mod projects;
pub mod repository;
pub mod tasks;

pub use developers::{DeveloperRepository, DeveloperStore};
pub use memory::InMemoryStore;
pub use pool::{Database, PoolStats};
pub use projects::{ProjectRepository, ProjectStore};
pub use repository::{Repository, RepositoryError, RepositoryResult};
pub use tasks::{TaskRepository, TaskStore};
