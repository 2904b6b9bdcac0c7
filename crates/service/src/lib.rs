//! Framework-independent business services for the carryou backend.

pub mod auth;
