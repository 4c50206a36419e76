use validator::Validate;

use crate::error::{Result, StorefrontError};

/// Card fields the payment form collects. Simulation only; nothing here
/// ever reaches a real processor.
#[derive(Debug, Clone, Validate)]
pub struct CardDetails {
    #[validate(length(min = 12, max = 19))]
    pub number: String,
    #[validate(length(min = 1))]
    pub holder: String,
    /// MM/YY.
    #[validate(length(min = 4, max = 5))]
    pub expiry: String,
    #[validate(length(min = 3, max = 4))]
    pub cvv: String,
}

/// UPI accepts either a picked app or a manually entered id.
#[derive(Debug, Clone, Default)]
pub struct UpiDetails {
    pub app: Option<String>,
    pub upi_id: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PaymentMethod {
    Card(CardDetails),
    Upi(UpiDetails),
    NetBanking { bank: String },
    Wallet { wallet: String },
}

impl PaymentMethod {
    /// Method-specific required-field check. A failure blocks submission
    /// before any request is sent.
    pub fn validate(&self) -> Result<()> {
        match self {
            PaymentMethod::Card(card) => {
                card.validate()
                    .map_err(|e| StorefrontError::Validation(e.to_string()))?;
                if !card.number.chars().all(|c| c.is_ascii_digit()) {
                    return Err(StorefrontError::Validation(
                        "card number must be digits only".to_string(),
                    ));
                }
                if !card.cvv.chars().all(|c| c.is_ascii_digit()) {
                    return Err(StorefrontError::Validation(
                        "cvv must be digits only".to_string(),
                    ));
                }
                Ok(())
            }
            PaymentMethod::Upi(upi) => {
                let has_app = upi.app.as_deref().is_some_and(|a| !a.is_empty());
                let has_id = upi.upi_id.as_deref().is_some_and(|i| i.contains('@'));
                if has_app || has_id {
                    Ok(())
                } else {
                    Err(StorefrontError::Validation(
                        "pick a UPI app or enter a valid UPI id".to_string(),
                    ))
                }
            }
            PaymentMethod::NetBanking { bank } => {
                if bank.is_empty() {
                    Err(StorefrontError::Validation("select a bank".to_string()))
                } else {
                    Ok(())
                }
            }
            PaymentMethod::Wallet { wallet } => {
                if wallet.is_empty() {
                    Err(StorefrontError::Validation("select a wallet".to_string()))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Label stored on the booking record.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card(_) => "card",
            PaymentMethod::Upi(_) => "upi",
            PaymentMethod::NetBanking { .. } => "netbanking",
            PaymentMethod::Wallet { .. } => "wallet",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardDetails {
        CardDetails {
            number: "4111111111111111".to_string(),
            holder: "A Sharma".to_string(),
            expiry: "09/27".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn complete_card_passes() {
        assert!(PaymentMethod::Card(card()).validate().is_ok());
    }

    #[test]
    fn card_with_missing_cvv_is_blocked() {
        let mut details = card();
        details.cvv = String::new();
        assert!(PaymentMethod::Card(details).validate().is_err());
    }

    #[test]
    fn card_number_with_letters_is_blocked() {
        let mut details = card();
        details.number = "4111abcd11111111".to_string();
        assert!(PaymentMethod::Card(details).validate().is_err());
    }

    #[test]
    fn upi_needs_an_app_or_an_id() {
        assert!(PaymentMethod::Upi(UpiDetails::default()).validate().is_err());
        assert!(PaymentMethod::Upi(UpiDetails {
            app: Some("gpay".to_string()),
            upi_id: None,
        })
        .validate()
        .is_ok());
        assert!(PaymentMethod::Upi(UpiDetails {
            app: None,
            upi_id: Some("asha@upi".to_string()),
        })
        .validate()
        .is_ok());
        // An id without the @ separator is not a UPI id.
        assert!(PaymentMethod::Upi(UpiDetails {
            app: None,
            upi_id: Some("asha".to_string()),
        })
        .validate()
        .is_err());
    }

    #[test]
    fn empty_bank_and_wallet_are_blocked() {
        assert!(PaymentMethod::NetBanking {
            bank: String::new()
        }
        .validate()
        .is_err());
        assert!(PaymentMethod::Wallet {
            wallet: "paytm".to_string()
        }
        .validate()
        .is_ok());
    }
}
