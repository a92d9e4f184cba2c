//! Status codes with a compact single-character storage form.
//!
//! ```
//! use status_rs::Status;
//!
//! assert_eq!(Status::Active.value(), "A");
//! assert_eq!(Status::resolve("d"), Status::Deleted);
//! assert_eq!(Status::resolve_name("active"), "PENDING");
//! ```

pub mod codec;
pub mod config;
mod db;
pub mod enums;
pub mod error;

pub use codec::StatusCodec;
pub use config::{Config, DecodeMode};
pub use enums::Status;
pub use error::StatusError;
