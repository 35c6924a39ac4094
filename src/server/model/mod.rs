//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and turned into ordered documents at the controller
//! boundary.
//!
//! - `document` - Ordered documents and relation-exclusion rules
//! - `field` - Field assignment from decoded request payloads
//! - `camper`, `activity`, `signup` - Domain models and their parameter types

pub mod activity;
pub mod camper;
pub mod document;
pub mod field;
pub mod signup;
