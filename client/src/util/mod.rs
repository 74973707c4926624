//! Client utility helpers.

pub mod auth;
pub mod dialog;
pub mod errors;
pub mod validate;
