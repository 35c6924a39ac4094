//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity. Repositories use SeaORM entity models internally and return them to the service
//! layer, which converts them to domain models. All database queries, inserts, updates, and
//! deletes are performed through these repositories.

pub mod activity;
pub mod camper;
pub mod signup;

#[cfg(test)]
mod test;
