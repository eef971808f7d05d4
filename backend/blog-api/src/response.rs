//! Response envelope shared by every API operation
//!
//! Every manager operation answers with the same shape: a `success` flag, a
//! human-readable `Message` (capitalized on the wire, a casing existing API
//! clients depend on), and an optional `data` array that is present only on
//! read operations.

use serde::{Deserialize, Serialize};

/// Uniform operation result returned by the managers and serialized to
/// API clients as-is.
///
/// Instances are built through [`Envelope::ok`], [`Envelope::ok_with_data`]
/// and [`Envelope::fail`] so the `success` flag and the message always agree;
/// there is no way to mutate an envelope after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = ()> {
    success: bool,
    #[serde(rename = "Message")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Vec<T>>,
}

impl<T> Envelope<T> {
    /// Successful mutation outcome, no payload.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Successful read outcome carrying the fetched rows.
    ///
    /// An empty `data` array is a valid outcome and still serializes as
    /// `"data": []`, never as a missing key.
    pub fn ok_with_data(message: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Rejected operation (validation failure), no payload.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }
}
