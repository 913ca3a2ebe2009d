//! Logging setup.
//!
//! Events from both `tracing` and `log` are written to stderr so they never
//! mix with quote output on stdout. `RUST_LOG` overrides the verbosity flag.
//!
//! ```ignore
//! use quotemap::observability::init_logging;
//!
//! fn main() {
//!     init_logging(cli.verbose);
//! }
//! ```

pub mod logging;

pub use logging::{default_directive, init_logging};
