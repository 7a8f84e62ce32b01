// HTML page handlers

pub mod common;
pub mod pages;
pub mod presentations;

pub use common::{HealthResponse, WebError};
