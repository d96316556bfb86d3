//! # gapgap_core
//!
//! Core domain logic for GapGap.

pub mod auth;
pub mod chats;
pub mod completion;
pub mod migrate;
pub mod models;
pub mod uuid;
