//! Pipeline orchestration for Datasmith.
//!
//! Sequences translation output through generation, materialization and
//! export as an explicit state machine: each stage consumes the previous
//! stage's value, so illegal orderings do not compile. A convenience
//! entry point runs every stage in order and short-circuits into a
//! structured failure naming the stage.

pub mod errors;
pub mod logging;
pub mod report;
pub mod stages;

pub use errors::{PipelineError, PipelineFailure, Stage};
pub use logging::init_run_logging;
pub use report::{RunOutcome, RunReport};
pub use stages::{
    run, Exported, Generated, Loaded, Pipeline, RunOptions, SchemaBound, StorePrepared,
    StrategyReady,
};
