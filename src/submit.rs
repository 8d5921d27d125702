//! Hand-off of completed bookings and contact messages.
//!
//! There is no backend behind the site yet: `SimulatedSubmitter` waits a
//! fixed delay and accepts everything.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{booking::BookingForm, contact::ContactForm, session::new_id};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub reference: String,
    pub received_at: DateTime<Utc>,
}

impl Receipt {
    fn issue() -> Self {
        Self {
            reference: new_id(),
            received_at: Utc::now(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit_booking(&self, booking: &BookingForm) -> Result<Receipt, SubmitError>;

    async fn submit_message(&self, message: &ContactForm) -> Result<Receipt, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit_booking(&self, booking: &BookingForm) -> Result<Receipt, SubmitError> {
        self.wait().await;
        let receipt = Receipt::issue();
        log::debug!(
            "Simulated booking {}: {}",
            receipt.reference,
            serde_json::to_string(booking).unwrap_or_default()
        );
        Ok(receipt)
    }

    async fn submit_message(&self, message: &ContactForm) -> Result<Receipt, SubmitError> {
        self.wait().await;
        let receipt = Receipt::issue();
        log::debug!(
            "Simulated contact message {} about '{}'",
            receipt.reference,
            message.subject
        );
        Ok(receipt)
    }
}
