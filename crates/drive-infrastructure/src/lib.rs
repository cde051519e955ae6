// Infrastructure layer - Technical implementations
// Depends on domain layer, implements its interfaces

pub mod config;
pub mod identity;
pub mod logging;
pub mod persistence;
