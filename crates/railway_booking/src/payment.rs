use std::time::Duration;

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::BookingError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentReceipt {
    pub reference: Uuid,
    pub amount: f64,
    #[schemars(with = "String")]
    pub paid_at: Timestamp,
}

/// Stand-in for a payment processor: waits for `delay`, then approves any
/// positive amount.
#[derive(Debug, Clone)]
pub struct PaymentSimulator {
    delay: Duration,
}

impl PaymentSimulator {
    pub fn new(delay: Duration) -> Self {
        PaymentSimulator { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn charge(&self, amount: f64) -> Result<PaymentReceipt, BookingError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(BookingError::PaymentDeclined(format!(
                "invalid amount {amount}"
            )));
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let receipt = PaymentReceipt {
            reference: Uuid::new_v4(),
            amount,
            paid_at: Timestamp::now(),
        };

        info!(reference = %receipt.reference, amount, "payment approved");
        Ok(receipt)
    }
}

impl Default for PaymentSimulator {
    fn default() -> Self {
        PaymentSimulator::new(Duration::from_secs(3))
    }
}
