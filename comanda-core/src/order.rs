//! Order submission payload
//!
//! The core builds the `lines` payload and its totals; the network call
//! itself lives in the client crate. Lines are price snapshots and are
//! never mutated after projection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::selection::{OrderSelectionLine, SelectionSummary};

/// Customer / waiter entered names
pub const MAX_NAME_LEN: usize = 100;
/// Table, room, or phone label
pub const MAX_IDENTIFICATION_LEN: usize = 100;
/// Free-form observations ("sem cebola")
pub const MAX_OBSERVATIONS_LEN: usize = 500;

/// Order submission payload handed to the order gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSubmission {
    pub base_item_id: String,
    pub customer_name: String,
    /// Table / room / phone label used to deliver the order
    pub identification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    pub lines: Vec<OrderSelectionLine>,
    /// Aggregate surcharge over `lines`
    pub additional_total: Decimal,
}

impl OrderSubmission {
    /// Build a submission from a projected summary
    pub fn from_summary(
        base_item_id: impl Into<String>,
        customer_name: impl Into<String>,
        identification: impl Into<String>,
        observations: Option<String>,
        summary: SelectionSummary,
    ) -> Self {
        Self {
            base_item_id: base_item_id.into(),
            customer_name: customer_name.into(),
            identification: identification.into(),
            observations,
            lines: summary.lines,
            additional_total: summary.additional_total,
        }
    }

    /// Basic field checks before the payload leaves the device
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.customer_name, "customer_name", MAX_NAME_LEN)?;
        validate_required_text(&self.identification, "identification", MAX_IDENTIFICATION_LEN)?;
        validate_optional_text(&self.observations, "observations", MAX_OBSERVATIONS_LEN)?;
        Ok(())
    }
}

/// Backend acknowledgement for a created order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_id: String,
    pub order_number: i64,
}

/// Validate that a required string is non-empty and within the length limit.
fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if value.len() > max_len {
        return Err(ValidationError::InvalidField {
            field: field.to_string(),
            message: format!("is too long ({} chars, max {max_len})", value.len()),
        });
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(ValidationError::InvalidField {
            field: field.to_string(),
            message: format!("is too long ({} chars, max {max_len})", v.len()),
        });
    }
    Ok(())
}
