//! PeopleMover client library.
//!
//! SYSTEM CONTEXT
//! ==============
//! The PeopleMover backend owns spaces, products, people, and assignments.
//! This crate is the client side: a typed REST client (`net`), the local
//! store the UI keeps between calls (`state`), and the pure display logic
//! layered on top of it (`util`). The `cli` crate drives all three.

pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

pub use config::ClientConfig;
pub use error::{ApiError, ErrorCode};
pub use net::api::ApiClient;
