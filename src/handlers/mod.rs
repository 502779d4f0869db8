//! HTTP handlers for the country API and the list page.

pub mod country;
pub mod page;
pub use country::*;
pub use page::*;
