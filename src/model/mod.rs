//! Wire-level data transfer objects.
//!
//! Responses are built as ordered documents by the server's serialization layer; these
//! types describe the same shapes for the OpenAPI document and for clients decoding
//! responses.

pub mod activity;
pub mod api;
pub mod camper;
pub mod signup;
