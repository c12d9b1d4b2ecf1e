//! Article domain entities.

pub mod draft;
pub mod model;
pub mod record;
pub mod status;

pub use draft::{ArticleDraft, strip_html};
pub use model::{Article, Author};
pub use record::{NewsPayload, NewsRecord};
pub use status::ArticleStatus;
