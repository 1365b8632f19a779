//! Per-payment affordability assessment.

pub mod assessor;
pub mod types;

pub use assessor::RiskAssessor;
pub use types::{PaymentRisk, RiskAssessment};
