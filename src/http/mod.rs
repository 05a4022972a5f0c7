//! HTTP protocol implementation.
//!
//! This module implements the small slice of HTTP/1.1 needed to serve static
//! files: one request per connection, GET and HEAD only, `Connection: close`
//! on every response.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine (read, respond, close)
//! - **`parser`**: Parses the request head out of the received bytes
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read up to the blank line (bounded)
//!        └──────┬──────┘
//!               │ Head parsed          ── empty / malformed ──┐
//!               ▼                                              │
//!        ┌──────────────────┐                                  │
//!        │     Parsed       │ ← Resolve path, build response   │
//!        └──────┬───────────┘                                  │
//!               │ Response ready                               │
//!               ▼                                              │
//!        ┌──────────────────┐                                  │
//!        │    Writing       │ ← Send response to client        │
//!        └──────┬───────────┘                                  │
//!               ▼                                              │
//!        ┌──────────────────┐                                  │
//!        │     Closed       │ ◄────────────────────────────────┘
//!        └──────────────────┘
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
