pub mod conversion;
pub mod prefix;

pub use conversion::{ConversionSummary, OutputSummary};
pub use prefix::{Derivation, PREFIXES, PrefixSpec};
