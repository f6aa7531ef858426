//! hrms - a small HTTP service for employee records
//!
//! Exposes list/create/update/delete endpoints over a single `employees`
//! collection in a document store:
//! - MongoDB backend for real deployments
//! - In-memory backend for tests and local runs
//! - One store handle, created at startup and shared by every handler

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
