pub mod evaluator;
pub mod validation;

pub use evaluator::ReportEvaluator;
pub use validation::ReportValidator;
