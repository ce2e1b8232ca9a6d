//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, document
//! classes, media queries) from page and component logic so the logic can be
//! exercised natively against in-memory stand-ins.

pub mod local_storage;
pub mod theme;
