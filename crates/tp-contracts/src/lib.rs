//! # tp-contracts
//!
//! Contract validation for Team Planner.
//!
//! Contracts validate DTOs before create/update operations. Checks that need
//! the data store (does the referenced project exist?) are resolved by the
//! caller and handed to the contract as plain facts.

pub mod base;
pub mod developers;
pub mod projects;
pub mod tasks;

pub use base::*;
pub use developers::{CreateDeveloperContract, UpdateDeveloperContract};
pub use projects::{CreateProjectContract, UpdateProjectContract};
pub use tasks::{CreateTaskContract, TaskReferences, UpdateTaskContract};
