//! Asset constant generation.
//!
//! The pipeline, leaves first:
//!
//! ```text
//! transform   path → identifier / code value (pure)
//! record      one discovered file + derived names
//! scan        directory walk with exclusion rules
//! collect     roots → filtered, sorted Vec<AssetRecord>
//! emit        records → generated Dart source text
//! pipeline    manifest → collect → emit → write
//! ```

pub mod collect;
pub mod emit;
pub mod pipeline;
pub mod record;
pub mod scan;
pub mod transform;

pub use pipeline::{GenerationPipeline, RunSummary};
pub use record::AssetRecord;
