//! Client-side state types.
//!
//! SYSTEM CONTEXT
//! ==============
//! State shared by components: the theme enum and the page scaffold's
//! signals. None of it depends on a browser.

pub mod scaffold;
pub mod theme;
