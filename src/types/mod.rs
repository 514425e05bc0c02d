//! Shared types: errors, configuration and clustering output.

pub mod cluster;
pub mod config;
pub mod error;

pub use cluster::{Cluster, ClusterSummary};
pub use config::{
    ClusterConfig, TokenizerConfig, DEFAULT_MIN_DOCUMENT_LENGTH, DEFAULT_SIM_THRESHOLD,
};
pub use error::{GroupError, GroupResult};
