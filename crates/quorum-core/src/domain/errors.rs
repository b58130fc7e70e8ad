//! Errors - policy evaluation failures and their classification
//!
//! Every error is returned to the immediate caller. Nothing here is transient,
//! so the engine never retries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// ErrorKind groups errors by what the caller has to fix.
///
/// - Parse: a decimal-bearing input is not a decimal string
/// - Validation: a value is outside its sign or range constraint
/// - Computation: checked arithmetic failed (overflow, negative result, zero divisor)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Validation,
    Computation,
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid decimal string {input:?}")]
    InvalidDecimal {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("expected a non-negative decimal, got {0}")]
    Negative(Decimal),

    #[error("expected a positive decimal, got {0}")]
    NotPositive(Decimal),

    #[error("invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("decimal overflow in {op}")]
    Overflow { op: &'static str },

    /// Tallied weight exceeding total power ends up here.
    #[error("result would be negative: {minuend} - {subtrahend}")]
    NegativeResult {
        minuend: Decimal,
        subtrahend: Decimal,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("proposal submitted at {submitted_at} is after current time {now}")]
    SubmittedInFuture {
        submitted_at: DateTime<Utc>,
        now: DateTime<Utc>,
    },
}

impl PolicyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PolicyError::InvalidDecimal { .. } => ErrorKind::Parse,
            PolicyError::Negative(_)
            | PolicyError::NotPositive(_)
            | PolicyError::InvalidParameter { .. }
            | PolicyError::SubmittedInFuture { .. } => ErrorKind::Validation,
            PolicyError::Overflow { .. }
            | PolicyError::NegativeResult { .. }
            | PolicyError::DivisionByZero => ErrorKind::Computation,
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PolicyError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
