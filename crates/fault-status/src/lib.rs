//! # fault-status
//!
//! Wire-level status envelope for Faultline.
//!
//! This crate models the generic failure representation carried on an RPC
//! call's terminal status:
//! - `Code`: the fixed gRPC status code enumeration
//! - `Status`: code + message + ordered list of typed details
//! - `Detail`: one structured payload identified by a stable type tag
//! - `DetailPayload`: the trait a payload struct implements to be packed into a `Detail`
//!
//! Raw protobuf bytes are never parsed here. Transports hand over an
//! already-decoded envelope (or its JSON form via serde).

mod code;
mod detail;
mod error;
mod status;

pub use code::Code;
pub use detail::{Detail, DetailPayload};
pub use error::StatusError;
pub use status::Status;
