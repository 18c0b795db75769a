pub mod orchestration;

pub use orchestration::{run_pipeline, WorkflowArgs, WorkflowResult};
