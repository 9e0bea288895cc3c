//! The sync pipeline: fetch → normalize → classify → upsert → summarize.
//!
//! One [`SyncPipeline::run`] call is one complete, sequential pass over the
//! source feed. Only a failed fetch is fatal; every per-record failure is
//! absorbed into the run counters.

mod pipeline;
mod run;

pub use pipeline::SyncPipeline;
pub use run::{Error, ExecutionType, RunResult, RunSummary, TriggerContext};
