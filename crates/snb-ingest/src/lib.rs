//! Discovery and reading of SNB data generator shards.

pub mod discovery;
pub mod error;
pub mod reader;

pub use discovery::{list_shard_files, shard_dir, shard_pattern};
pub use error::{IngestError, Result};
pub use reader::{PipeRecord, ShardReader};
