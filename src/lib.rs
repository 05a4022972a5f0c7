//! WIMWSOP - minimal static file server
//!
//! Core library for HTTP parsing, file resolution and the worker pool.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
