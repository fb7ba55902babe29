//! In-memory client store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The web client kept the current space, the board for the viewing date,
//! filter selections, and runtime flags in a reactive store. Here they are
//! plain owned structs: a command loads what it needs through `ApiClient`,
//! updates the store, and reads derived lists back out of `SpaceView`.

pub mod filters;
pub mod flags;
pub mod space;
pub mod view;

pub use filters::{ActiveFilters, FilterGroup, FilterOption, FilterType};
pub use flags::Flags;
pub use space::SpaceState;
pub use view::SpaceView;
