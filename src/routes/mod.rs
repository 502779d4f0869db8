//! Routers: common (health/ready/version) and country API + page.

mod common;
mod country;

pub use common::common_routes_with_ready;
pub use country::{app, country_routes};
