//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a Leptos component plus a `render` binding with the
//! [`PageFn`](crate::app::PageFn) signature. The binding reads its route
//! parameters and hands them to the component; the component owns markup.

pub mod creators;
pub mod not_found;
pub mod preview;
pub mod profile;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
