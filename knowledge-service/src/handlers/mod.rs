//! HTTP handlers for the knowledge relay service.

pub mod health;
pub mod knowledge;
