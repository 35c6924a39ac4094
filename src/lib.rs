//! Camp signup backend: campers, activities and the signups joining them, exposed over a
//! JSON REST API.

pub mod model;
pub mod server;
