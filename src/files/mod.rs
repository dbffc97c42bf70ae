//! File access for the server and the command-line utilities.
//!
//! - **`store`**: the async "exists" / "read" primitives behind the [`FileStore`] trait
//! - **`responder`**: maps request paths onto the public directory
//! - **`ops`**: one-shot copy and read helpers used by the `mycopy` and `reader` binaries

pub mod ops;
pub mod responder;
pub mod store;

pub use ops::{CopyError, ReadError, copy_file, read_contents};
pub use responder::StaticResponder;
pub use store::{DiskStore, FileStore};
