//! Shared constants for the research responder and its CLI
//!
//! Kept in one place so the library, the binary and the tests agree on the
//! exact strings that make up the output contract.

/// Logger name every research log line is emitted under
pub const LOGGER_NAME: &str = "research";

/// Usage line printed when the CLI is invoked without a query
pub const USAGE: &str = "Usage: research.py <query> [session_id]";

/// Number of records in every successful response
pub const RESULT_COUNT: usize = 3;

/// Default log line timestamp, e.g. `2025-01-29 14:03:07,512`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Default log filter directive (overridden by `RUST_LOG`)
pub const DEFAULT_LOG_LEVEL: &str = "info";
