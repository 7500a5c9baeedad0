//! HTTP route handlers

pub mod clozes;
pub mod render;
