//! Infrastructure layer - Configuration, seed data and the in-memory store

pub mod catalog;
pub mod config;
pub mod store;

pub use catalog::SeedCatalog;
pub use config::Config;
pub use store::{EntityStore, MomentLinks, Notice, NoticeKind, StoreSettings};
