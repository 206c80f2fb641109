//! Engineering-economics evaluation engine
//!
//! This library evaluates the economic viability of capital projects using
//! standard engineering-economics metrics:
//! - Net Present Worth (NPW): cash flows discounted to time 0
//! - Benefit/Cost (B/C) ratio: discounted benefits over discounted costs
//! - Internal Rate of Return (IRR): the rate that zeroes NPW
//!
//! A batch of projects is evaluated independently, one result per project
//! in input order; per-project failures are reported as statuses instead of
//! aborting the run.

pub mod cashflow;
pub mod error;
pub mod evaluation;
pub mod project;

// Re-export commonly used types
pub use cashflow::CashFlowSeries;
pub use error::{EvalError, EvalStatus};
pub use evaluation::{EvaluationResult, EvaluationService, IrrConfig, IrrSolution, Method, ServiceConfig};
pub use project::Project;
