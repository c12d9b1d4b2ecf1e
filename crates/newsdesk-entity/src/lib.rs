//! # newsdesk-entity
//!
//! Domain models for Newsdesk. Every struct in this crate is either a
//! domain value handed to the views, a record in the platform's wire
//! format, or a form with its validation rules. All derive `Debug`,
//! `Clone`, `Serialize` and `Deserialize`.

pub mod article;
pub mod category;
pub mod employee;
pub mod user;

pub use article::{Article, ArticleDraft, ArticleStatus, Author, NewsPayload, NewsRecord};
pub use category::Category;
pub use employee::{Employee, NewEmployee};
pub use user::{AccountStatus, User, UserRole};
