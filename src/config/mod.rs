/// Database configuration and connection management
pub mod database;

/// First-run seed data loaded from everafter.toml
pub mod seed;
