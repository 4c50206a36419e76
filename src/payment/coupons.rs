//! Static coupon rules and discount arithmetic.
//!
//! Coupons are a fixed table baked into the client; the backend only ever
//! sees the final amount. Amounts are whole rupees.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountType {
    Percentage,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coupon {
    pub code: &'static str,
    pub discount_type: DiscountType,
    pub value: i64,
    /// Cap for percentage discounts; flat coupons ignore it.
    pub max_discount: Option<i64>,
}

pub const COUPONS: &[Coupon] = &[
    Coupon {
        code: "FIRST50",
        discount_type: DiscountType::Percentage,
        value: 50,
        max_discount: Some(100),
    },
    Coupon {
        code: "FLAT20",
        discount_type: DiscountType::Flat,
        value: 20,
        max_discount: None,
    },
    Coupon {
        code: "SAVE10",
        discount_type: DiscountType::Percentage,
        value: 10,
        max_discount: None,
    },
];

/// Case-insensitive lookup in the fixed table.
pub fn find(code: &str) -> Option<&'static Coupon> {
    COUPONS.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

impl Coupon {
    pub fn discount(&self, base: i64) -> i64 {
        let raw = match self.discount_type {
            DiscountType::Percentage => base * self.value / 100,
            DiscountType::Flat => self.value,
        };
        match self.max_discount {
            Some(cap) if self.discount_type == DiscountType::Percentage => raw.min(cap),
            _ => raw,
        }
    }
}

/// The amount under construction on the payment step: a base price plus
/// at most one active coupon. Applying a new coupon replaces the old one;
/// removing it returns the discount to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentDraft {
    base: i64,
    coupon: Option<Coupon>,
}

impl PaymentDraft {
    pub fn new(base: i64) -> Self {
        Self { base, coupon: None }
    }

    pub fn base(&self) -> i64 {
        self.base
    }

    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    /// Returns the applied coupon, or `None` for an unknown code (the
    /// caller shows the invalid-coupon notice; draft is unchanged).
    pub fn apply_coupon(&mut self, code: &str) -> Option<&Coupon> {
        match find(code) {
            Some(coupon) => {
                self.coupon = Some(*coupon);
                self.coupon.as_ref()
            }
            None => None,
        }
    }

    pub fn remove_coupon(&mut self) {
        self.coupon = None;
    }

    pub fn discount(&self) -> i64 {
        self.coupon.map(|c| c.discount(self.base)).unwrap_or(0)
    }

    /// Never negative, whatever the coupon says.
    pub fn final_amount(&self) -> i64 {
        (self.base - self.discount()).max(0)
    }
}
