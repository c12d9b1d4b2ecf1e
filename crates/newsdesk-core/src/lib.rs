//! # newsdesk-core
//!
//! Core crate for Newsdesk. Contains the pagination engine shared by every
//! list view, configuration schemas, typed identifiers, query/sort types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Newsdesk crates.

pub mod config;
pub mod error;
pub mod pager;
pub mod result;
pub mod types;

pub use error::AppError;
pub use pager::{PageBar, PageWindow, Paginator, PaginationError};
pub use result::AppResult;
