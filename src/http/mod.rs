//! HTTP/1.1 front end for the static responder.
//!
//! - **`connection`**: per-connection request/response state machine
//! - **`parser`**: parses incoming requests from byte buffers
//! - **`request`**: request representation and header helpers
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received (or 400 on a malformed one)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Ask the static responder
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection)
//!               └─ Close → Closed
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
