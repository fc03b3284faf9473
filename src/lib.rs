//! HR & Payroll API
//!
//! Backend for an HR portal: employee registration with field rules,
//! archival of departing employees, payroll rows and a role-discriminated
//! login for employees, HR users and the super admin.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records, field rules and the login principal
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories and the Unit of Work
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Employee, ExEmployee, Payroll, Principal};
pub use errors::{AppError, AppResult};
