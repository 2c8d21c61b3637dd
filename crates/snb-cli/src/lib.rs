//! Library components of the SNB to LGraph CSV converter CLI.

pub mod batch;
pub mod logging;
pub mod types;
