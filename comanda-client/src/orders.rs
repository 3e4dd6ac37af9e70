//! Order submission gateway
//!
//! One-shot call handing the finished selection lines to the backend.
//! On failure the caller's `SelectionSession` is untouched, so the
//! customer retries without re-entering selections.

use std::sync::Mutex;

use async_trait::async_trait;
use comanda_core::order::{OrderReceipt, OrderSubmission};
use tracing::info;

use crate::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

/// Write side: creates an order from a submission payload
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit_order(&self, submission: &OrderSubmission) -> ClientResult<OrderReceipt>;
}

/// REST-backed order gateway
#[derive(Debug, Clone)]
pub struct HttpOrderClient {
    http: HttpClient,
}

impl HttpOrderClient {
    /// Create a new order client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }
}

#[async_trait]
impl OrderGateway for HttpOrderClient {
    async fn submit_order(&self, submission: &OrderSubmission) -> ClientResult<OrderReceipt> {
        submission
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        let receipt: OrderReceipt = self.http.post("api/orders", submission).await?;
        info!(
            order_id = %receipt.order_id,
            order_number = receipt.order_number,
            lines = submission.lines.len(),
            "order submitted"
        );
        Ok(receipt)
    }
}

/// In-memory gateway for tests and offline demos.
///
/// Records every submission and hands back sequential receipts; the
/// failing variant rejects everything to exercise retry paths.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    submissions: Mutex<Vec<OrderSubmission>>,
    fail: bool,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that rejects every submission
    pub fn failing() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Submissions accepted so far
    pub fn submissions(&self) -> Vec<OrderSubmission> {
        self.submissions.lock().expect("gateway lock poisoned").clone()
    }
}

#[async_trait]
impl OrderGateway for RecordingGateway {
    async fn submit_order(&self, submission: &OrderSubmission) -> ClientResult<OrderReceipt> {
        submission
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        if self.fail {
            return Err(ClientError::Backend {
                status: 503,
                message: "order service unavailable".to_string(),
            });
        }

        let mut submissions = self.submissions.lock().expect("gateway lock poisoned");
        submissions.push(submission.clone());
        let order_number = submissions.len() as i64;
        Ok(OrderReceipt {
            order_id: format!("order-{order_number}"),
            order_number,
        })
    }
}
