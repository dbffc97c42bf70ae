//! fileserve - static file responder and async file utilities
//!
//! Core library for the HTTP front end, the static content responder and the
//! copy/print helpers.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
