//! App - composes the domain with the ports.

pub mod evaluator;

pub use self::evaluator::Evaluator;
