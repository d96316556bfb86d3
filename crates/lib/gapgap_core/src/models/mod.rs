//! Domain models shared between core and the API layer.

pub mod auth;
