//! Library components of the `insightflow` binary: configuration, logging
//! and the ingest → remediate pipeline.

pub mod config;
pub mod logging;
pub mod pipeline;
