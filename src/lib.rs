// Library entry point for cartoon-catalog
// Exposes modules for consumers and tests

pub mod models;
pub mod nav;
pub mod persist;
pub mod seed;
pub mod store;
pub mod views;
