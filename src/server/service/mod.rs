//! Business logic layer between controllers and repositories.
//!
//! Services orchestrate repository calls, load the relations each response needs and
//! convert entity models into domain models.

pub mod activity;
pub mod camper;
pub mod signup;
