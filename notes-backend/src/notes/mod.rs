//! Notes system — an ordered note collection persisted as one JSON file
//!
//! Notes are created and deleted over the REST API; there is no update.

pub mod file_ops;
pub mod store;

pub use store::NoteStore;
