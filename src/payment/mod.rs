pub mod checkout;
pub mod coupons;
pub mod methods;

pub use checkout::{Checkout, CheckoutOrder};
pub use coupons::{Coupon, DiscountType, PaymentDraft};
pub use methods::{CardDetails, PaymentMethod, UpiDetails};
