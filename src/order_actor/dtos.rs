use rust_decimal::Decimal;

/// Payload for creating an order at checkout.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub address: String,
    /// Caller-supplied total; defaults to zero.
    pub total_price: Decimal,
    pub payment_details: String,
}

impl OrderCreate {
    pub fn new(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            customer_phone: None,
            address: address.into(),
            total_price: Decimal::ZERO,
            payment_details: String::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into());
        self
    }

    pub fn with_total_price(mut self, total_price: Decimal) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn with_payment_details(mut self, details: impl Into<String>) -> Self {
        self.payment_details = details.into();
        self
    }
}

/// Partial update. `created_at` has no counterpart: it never changes.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    /// `Some(None)` clears the phone number.
    pub customer_phone: Option<Option<String>>,
    pub address: Option<String>,
    pub total_price: Option<Decimal>,
    pub payment_details: Option<String>,
}
