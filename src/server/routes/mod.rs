//! API route handlers
//!
//! This module contains all HTTP route handlers for the server.

pub mod commit;
pub mod health;
pub mod models;
