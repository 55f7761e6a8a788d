use super::draft::TransactionDraft;
use rust_decimal::Decimal;

/// Decides whether a draft may move past the first button stage.
pub struct FormValidator;

impl FormValidator {
    /// True iff the sanitized phone is non-empty and the amount is positive.
    pub fn is_valid(draft: &TransactionDraft) -> bool {
        !draft.phone().is_empty() && draft.amount() > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let draft = TransactionDraft::new("061329999", "1", "DBC****9460");
        assert!(FormValidator::is_valid(&draft));
    }

    #[test]
    fn test_empty_phone_is_invalid() {
        let draft = TransactionDraft::new("", "10", "DBC****9460");
        assert!(!FormValidator::is_valid(&draft));

        // Only non-digits: empty after sanitization
        let draft = TransactionDraft::new("(--)", "10", "DBC****9460");
        assert!(!FormValidator::is_valid(&draft));
    }

    #[test]
    fn test_non_positive_amount_is_invalid() {
        for amount in ["0", "0.00", "-5", "", "abc"] {
            let draft = TransactionDraft::new("061329999", amount, "DBC****9460");
            assert!(!FormValidator::is_valid(&draft), "amount {amount:?}");
        }
    }

    #[test]
    fn test_small_positive_amount_is_valid() {
        let draft = TransactionDraft::new("1", "0.01", "");
        assert!(FormValidator::is_valid(&draft));
    }
}
