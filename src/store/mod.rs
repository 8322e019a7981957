//! Record list persistence
//!
//! One JSON snapshot file per install, rewritten wholesale on every
//! mutation of the in-memory record list.

mod record;
mod store;

pub use record::Record;
pub use store::RecordStore;
