//! Employee API Server
//!
//! In-memory HTTP service for managing employee records.
//!
//! # Module structure
//!
//! ```text
//! employee-server/src/
//! ├── core/          # Config, server state
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Models and in-memory repositories
//! └── utils/         # Errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{Config, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;
