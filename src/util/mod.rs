//! Display logic shared by the CLI and the client store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nearly everything here is a pure function over wire DTOs, so it can be
//! exercised without a backend. The exceptions are the key-value store in
//! `persistence` and the two multi-call flows in `reassign`.

pub mod auth;
pub mod banner;
pub mod duration;
pub mod form;
pub mod import;
pub mod person;
pub mod persistence;
pub mod product;
pub mod reassign;
pub mod report;
pub mod sort;
pub mod time_on_product;
pub mod user_id;
