//! Creator portal: URL route registry and server-rendered pages.

pub mod app;
pub mod config;
pub mod navigation;
pub mod pages;
pub mod registry;
pub mod routes;
pub mod state;
