//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome while reading shared services from Leptos
//! context providers.

pub mod page_scaffold;
