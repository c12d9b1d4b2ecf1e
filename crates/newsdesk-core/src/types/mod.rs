//! Core type definitions used across the Newsdesk workspace.

pub mod filter;
pub mod id;
pub mod pagination;
pub mod response;
pub mod sorting;
pub mod validation;

pub use filter::{CategoryFilter, SearchTerm};
pub use id::*;
pub use pagination::{PageQuery, PagedNews};
pub use response::ApiMessage;
pub use sorting::ArticleSort;
pub use validation::FieldErrors;
