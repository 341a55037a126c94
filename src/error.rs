//! Error type shared by every request boundary in the crate.
//!
//! The scaling-law functions themselves are total and never fail; only the
//! request types validate and return [`EngineError`].

use tracing::warn;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("missing required parameters: {}", .fields.join(", "))]
    MissingParameters { fields: Vec<&'static str> },

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("asteroid record {id} has no usable {field}")]
    IncompleteRecord { id: String, field: &'static str },
}

impl EngineError {
    /// Names of the fields this error refers to, for building a corrective response.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            EngineError::MissingParameters { fields } => fields.clone(),
            EngineError::InvalidParameter { field, .. } => vec![*field],
            EngineError::IncompleteRecord { field, .. } => vec![*field],
            EngineError::Malformed(_) => Vec::new(),
        }
    }

    /// True for errors caused by the caller's input rather than a bad record.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::MissingParameters { .. }
                | EngineError::InvalidParameter { .. }
                | EngineError::Malformed(_)
        )
    }
}

/// Domain a numeric field must fall in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Domain {
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    NonNegative,
    /// Within [0, 1].
    Probability,
    /// Any finite value.
    Finite,
    /// Degrees strictly between -90 and 90.
    ObliqueAngle,
}

impl Domain {
    fn violation(self, value: f64) -> Option<&'static str> {
        if !value.is_finite() {
            return Some("must be a finite number");
        }
        match self {
            Domain::Positive if value <= 0.0 => Some("must be greater than zero"),
            Domain::NonNegative if value < 0.0 => Some("must not be negative"),
            Domain::Probability if !(0.0..=1.0).contains(&value) => {
                Some("must be between 0 and 1")
            }
            Domain::ObliqueAngle if value.abs() >= 90.0 => {
                Some("must be strictly between -90 and 90 degrees")
            }
            _ => None,
        }
    }
}

/// Collects missing and out-of-domain fields of one request.
///
/// Every missing field is reported together; domain violations are only
/// reported once all required fields are present.
#[derive(Debug, Default)]
pub(crate) struct FieldCheck {
    missing: Vec<&'static str>,
    invalid: Option<(&'static str, f64, &'static str)>,
}

impl FieldCheck {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Take a required field. Returns NaN when absent; [`FieldCheck::finish`]
    /// fails in that case so the placeholder never reaches a formula.
    pub(crate) fn required(&mut self, name: &'static str, value: Option<f64>, domain: Domain) -> f64 {
        match value {
            Some(v) => {
                self.check(name, v, domain);
                v
            }
            None => {
                self.missing.push(name);
                f64::NAN
            }
        }
    }

    /// Take an optional field, substituting `default` when absent.
    pub(crate) fn optional(
        &mut self,
        name: &'static str,
        value: Option<f64>,
        default: f64,
        domain: Domain,
    ) -> f64 {
        let v = value.unwrap_or(default);
        self.check(name, v, domain);
        v
    }

    /// Check a derived value that is not itself a request field.
    pub(crate) fn derived(&mut self, name: &'static str, value: f64, domain: Domain) {
        if self.missing.is_empty() {
            self.check(name, value, domain);
        }
    }

    fn check(&mut self, name: &'static str, value: f64, domain: Domain) {
        if self.invalid.is_some() {
            return;
        }
        if let Some(reason) = domain.violation(value) {
            self.invalid = Some((name, value, reason));
        }
    }

    pub(crate) fn finish(self, operation: &'static str) -> Result<()> {
        if !self.missing.is_empty() {
            warn!(operation, missing = ?self.missing, "rejecting request with missing parameters");
            return Err(EngineError::MissingParameters {
                fields: self.missing,
            });
        }
        if let Some((field, value, reason)) = self.invalid {
            warn!(operation, field, value, reason, "rejecting request with invalid parameter");
            return Err(EngineError::InvalidParameter {
                field,
                value,
                reason,
            });
        }
        Ok(())
    }
}
