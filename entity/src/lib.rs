//! SeaORM entity models for the camp signup store.

pub mod prelude;

pub mod activity;
pub mod camper;
pub mod signup;
