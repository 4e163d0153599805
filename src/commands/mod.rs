//! Command implementations for the CLI
//!
//! - start: Start the quote server
//! - quote: Price a single trip from the command line
//! - config: Configuration display and validation

pub mod config;
pub mod quote;
pub mod start;
