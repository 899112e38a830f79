use thiserror::Error;

/// Kind of input record that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Sale,
    Promotion,
    Campaign,
    Inventory,
    Shipment,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Sale => write!(f, "sale"),
            RecordKind::Promotion => write!(f, "promotion"),
            RecordKind::Campaign => write!(f, "campaign"),
            RecordKind::Inventory => write!(f, "inventory"),
            RecordKind::Shipment => write!(f, "shipment"),
        }
    }
}

/// Errors raised while validating analytics inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// A required column was empty or absent.
    #[error("Invalid {kind} record '{id}': missing required field '{field}'")]
    MissingField {
        /// Record kind.
        kind: RecordKind,
        /// Identifier of the record, or `<unknown>` when the id itself is missing.
        id: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A record is present but semantically malformed.
    #[error("Invalid {kind} record '{id}': {reason}")]
    InvalidRecord {
        /// Record kind.
        kind: RecordKind,
        /// Identifier of the record.
        id: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl AnalyticsError {
    pub fn missing(kind: RecordKind, id: Option<&str>, field: &'static str) -> Self {
        Self::MissingField {
            kind,
            id: id.unwrap_or("<unknown>").to_string(),
            field,
        }
    }

    pub fn invalid(kind: RecordKind, id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            kind,
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
