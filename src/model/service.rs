use serde::{Deserialize, Serialize};

use crate::model::Entity;

/// How a service is billed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Price is negotiated per order, no amount is stored
    #[default]
    Agreement,
    /// Fixed rate per hour
    Hourly,
    /// Fixed amount for the whole scope of work
    Volume,
}

impl PaymentType {
    pub const ALL: [PaymentType; 3] = [
        PaymentType::Agreement,
        PaymentType::Hourly,
        PaymentType::Volume,
    ];

    /// Hourly and volume billing must carry an amount.
    pub fn requires_price(self) -> bool {
        matches!(self, PaymentType::Hourly | PaymentType::Volume)
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentType::Agreement => "By agreement",
            PaymentType::Hourly => "Hourly rate",
            PaymentType::Volume => "Per scope of work",
        }
    }

    /// Unit shown next to the amount, `None` when no amount is stored.
    pub fn price_unit(self) -> Option<&'static str> {
        match self {
            PaymentType::Agreement => None,
            PaymentType::Hourly => Some("$/hour"),
            PaymentType::Volume => Some("$"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Option<u64>,
    pub name: String,
    pub payment_type: PaymentType,
    /// Always `None` for [`PaymentType::Agreement`]
    pub price: Option<String>,
    pub is_active: bool,
}

impl Service {
    /// Price formatted with its unit, e.g. `50 $/hour`.
    pub fn price_display(&self) -> String {
        match (&self.price, self.payment_type.price_unit()) {
            (Some(price), Some(unit)) => format!("{} {}", price, unit),
            _ => self.payment_type.label().to_string(),
        }
    }
}

impl Entity for Service {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}
