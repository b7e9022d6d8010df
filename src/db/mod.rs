//! Assembly database for one loaded NEO dataset.
//!
//! The loader constructs objects and approaches independently (each
//! approach knows only a designation string); this module owns the
//! second phase that resolves every designation to a live handle and
//! records the link on both sides. After that single pass the database
//! is treated as read-only.

pub mod database;
pub mod error;

pub use database::NeoDatabase;
pub use error::{DatabaseError, DbResult};
