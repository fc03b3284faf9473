//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Default allowed CORS origin (the admin front end dev server)
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Maximum request body size (multipart uploads carry images)
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

// =============================================================================
// Database
// =============================================================================

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default database port
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default database user
pub const DEFAULT_DB_USER: &str = "postgres";

/// Default database name
pub const DEFAULT_DB_NAME: &str = "hr_portal";

/// Maximum pooled connections
pub const DEFAULT_POOL_MAX_CONNECTIONS: u32 = 5;

/// Minimum pooled connections
pub const DEFAULT_POOL_MIN_CONNECTIONS: u32 = 0;

/// How long to wait for a free connection before failing (ms)
pub const DEFAULT_POOL_ACQUIRE_TIMEOUT_MS: u64 = 30_000;

/// How long an idle connection is kept before release (ms)
pub const DEFAULT_POOL_IDLE_TIMEOUT_MS: u64 = 10_000;

// =============================================================================
// Stakeholders
// =============================================================================

pub const STAKEHOLDER_EMPLOYEE: &str = "employee";
pub const STAKEHOLDER_HR: &str = "hr";
pub const STAKEHOLDER_SUPERADMIN: &str = "superadmin";

// =============================================================================
// Validation
// =============================================================================

/// Maximum number of skills on an employee record
pub const MAX_SKILLS: usize = 5;

/// Digits in a phone number (local mobile format)
pub const PHONE_DIGITS: usize = 11;

/// Only accepted media type for employee pictures
pub const JPEG_MIME: &str = "image/jpeg";
