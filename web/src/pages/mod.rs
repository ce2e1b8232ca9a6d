//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wraps its content in `PageScaffold` and delegates chrome to
//! `components`.

pub mod home;
