pub mod lenient;
pub mod validation_problem;

pub use validation_problem::ValidationProblem;
