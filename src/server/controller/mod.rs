//! HTTP request handlers.
//!
//! Each handler decodes its request, calls the matching service and serializes the result
//! into a document with the relation-exclusion rules of its route.

pub mod activity;
pub mod camper;
pub mod root;
pub mod signup;

#[cfg(test)]
mod test;
