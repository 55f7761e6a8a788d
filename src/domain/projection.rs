use super::draft::TransactionDraft;
use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

const DATE_FORMAT: &str = "%d.%m.%y";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Display strings for one modal, captured at the moment it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub amount: String,
    pub phone: String,
    pub card: String,
    pub date: String,
    pub time: String,
}

/// Maps a draft and a timestamp to the strings the modals display.
#[derive(Debug, Clone)]
pub struct ViewProjector {
    currency: String,
}

impl ViewProjector {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn project(&self, draft: &TransactionDraft, timestamp: NaiveDateTime) -> DisplayModel {
        DisplayModel {
            amount: self.format_amount(draft.amount()),
            phone: draft.phone().to_string(),
            card: draft.selected_card().to_string(),
            date: timestamp.format(DATE_FORMAT).to_string(),
            time: timestamp.format(TIME_FORMAT).to_string(),
        }
    }

    /// Two decimal places, then the currency suffix: `1` becomes `1.00 TJS`.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        // Precision pads even when the value has no room left for a scale of 2
        format!("{:.2} {}", rounded, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    #[test]
    fn test_format_amount_two_decimals() {
        let projector = ViewProjector::new("TJS");
        assert_eq!(projector.format_amount(dec!(1)), "1.00 TJS");
        assert_eq!(projector.format_amount(dec!(0)), "0.00 TJS");
        assert_eq!(projector.format_amount(dec!(12.5)), "12.50 TJS");
        assert_eq!(projector.format_amount(dec!(3.14159)), "3.14 TJS");
        assert_eq!(projector.format_amount(dec!(2.005)), "2.01 TJS");
        assert_eq!(projector.format_amount(dec!(1000000)), "1000000.00 TJS");
    }

    #[test]
    fn test_format_amount_zero_has_no_sign() {
        let projector = ViewProjector::new("TJS");
        assert_eq!(projector.format_amount(dec!(-0.00)), "0.00 TJS");
        assert_eq!(projector.format_amount(dec!(0.001)), "0.00 TJS");
    }

    #[test]
    fn test_format_amount_at_decimal_limits() {
        let projector = ViewProjector::new("TJS");
        assert_eq!(
            projector.format_amount(dec!(1000000000000000000000000000)),
            "1000000000000000000000000000.00 TJS"
        );
        assert_eq!(
            projector.format_amount(Decimal::MAX),
            "79228162514264337593543950335.00 TJS"
        );
        assert_eq!(
            projector.format_amount(crate::domain::draft::parse_amount(
                "79228162514264337593543950335"
            )),
            "79228162514264337593543950335.00 TJS"
        );
    }

    #[test]
    fn test_project_draft() {
        let projector = ViewProjector::new("TJS");
        let draft = TransactionDraft::new("061329999", "1", "DBC****9460");

        let model = projector.project(&draft, timestamp());
        assert_eq!(
            model,
            DisplayModel {
                amount: "1.00 TJS".to_string(),
                phone: "061329999".to_string(),
                card: "DBC****9460".to_string(),
                date: "07.03.24".to_string(),
                time: "09:05:03".to_string(),
            }
        );
    }

    #[test]
    fn test_custom_currency() {
        let projector = ViewProjector::new("USD");
        let draft = TransactionDraft::new("1", "7.5", "");
        assert_eq!(projector.project(&draft, timestamp()).amount, "7.50 USD");
    }
}
