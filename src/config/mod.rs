/// Database configuration and connection management
pub mod database;

/// Input file location configuration from seeder.toml and the environment
pub mod sources;
