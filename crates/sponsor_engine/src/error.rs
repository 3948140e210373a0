use std::io;

use thiserror::Error;
use tokio::runtime::Runtime;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("coordinator task did not shut down cleanly: {0}")]
    PipelineJoin(String),
}

/// Single-threaded runtime for hosts that do not already own one; the
/// pipeline and every session timer share one serialized context.
pub fn build_runtime() -> Result<Runtime, EngineError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}
