// Domain layer - grid, rule and patterns
pub mod domain;

// Application layer - frame loop state and timing
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Ambient
pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, Seeded};
pub use application::GameState;
pub use config::Config;
pub use error::{Error, Result};
