//! Metric evaluators and batch orchestration

pub mod bc_ratio;
pub mod irr;
pub mod npw;
mod service;

pub use irr::{IrrConfig, IrrSolution};
pub use service::{EvaluationResult, EvaluationService, Method, ServiceConfig};
