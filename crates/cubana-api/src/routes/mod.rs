//! Route handler modules

pub mod auth;
pub mod dashboard;
pub mod finance;
pub mod operations;
