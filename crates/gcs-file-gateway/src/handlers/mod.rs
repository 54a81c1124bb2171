//! HTTP request handlers

pub mod file;
pub mod service;

pub use file::*;
pub use service::*;
