use rust_decimal::Decimal;
use std::str::FromStr;

/// The values the user is currently editing.
///
/// Owned by the checkout session and only mutated by input and card-selection
/// handlers. The phone is always stored digits-only; the amount is always a
/// parsed number, with unparseable text stored as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    phone: String,
    amount: Decimal,
    selected_card: String,
}

impl TransactionDraft {
    pub fn new(phone: &str, amount: &str, selected_card: impl Into<String>) -> Self {
        Self {
            phone: sanitize_phone(phone),
            amount: parse_amount(amount),
            selected_card: selected_card.into(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn selected_card(&self) -> &str {
        &self.selected_card
    }

    /// Stores the digits of `raw` and returns the sanitized value.
    pub fn set_phone(&mut self, raw: &str) -> &str {
        self.phone = sanitize_phone(raw);
        &self.phone
    }

    pub fn set_amount(&mut self, raw: &str) -> Decimal {
        self.amount = parse_amount(raw);
        self.amount
    }

    pub fn select_card(&mut self, card: impl Into<String>) {
        self.selected_card = card.into();
    }
}

/// Drops every character that is not an ASCII digit.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parses the leading number of `raw`, ignoring whatever follows it.
///
/// `"12.5abc"` is 12.5, `".5"` is 0.5, and text without a leading number is 0.
pub fn parse_amount(raw: &str) -> Decimal {
    let text = raw.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let integer = &rest[..int_len];
    let fraction = rest[int_len..]
        .strip_prefix('.')
        .map(|tail| &tail[..tail.bytes().take_while(u8::is_ascii_digit).count()])
        .unwrap_or("");

    if integer.is_empty() && fraction.is_empty() {
        return Decimal::ZERO;
    }

    let mut normalized = String::with_capacity(int_len + fraction.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if integer.is_empty() { "0" } else { integer });
    if !fraction.is_empty() {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sanitize_phone_strips_non_digits() {
        assert_eq!(sanitize_phone("+992 (06) 132-99-99"), "992061329999");
        assert_eq!(sanitize_phone("abc"), "");
        assert_eq!(sanitize_phone(""), "");
    }

    #[test]
    fn test_parse_amount_plain_numbers() {
        assert_eq!(parse_amount("1"), dec!(1));
        assert_eq!(parse_amount("  25.50"), dec!(25.50));
        assert_eq!(parse_amount(".5"), dec!(0.5));
        assert_eq!(parse_amount("7."), dec!(7));
        assert_eq!(parse_amount("+3"), dec!(3));
    }

    #[test]
    fn test_parse_amount_uses_leading_number() {
        assert_eq!(parse_amount("12.5abc"), dec!(12.5));
        assert_eq!(parse_amount("10,50"), dec!(10));
        assert_eq!(parse_amount("1.2.3"), dec!(1.2));
    }

    #[test]
    fn test_parse_amount_coerces_garbage_to_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("."), Decimal::ZERO);
        assert_eq!(parse_amount("-"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_keeps_sign() {
        assert_eq!(parse_amount("-4.25"), dec!(-4.25));
    }

    #[test]
    fn test_draft_setters_sanitize() {
        let mut draft = TransactionDraft::new("061-329-999", "1", "DBC****9460");
        assert_eq!(draft.phone(), "061329999");
        assert_eq!(draft.amount(), dec!(1));

        assert_eq!(draft.set_phone("93 000 11 22"), "930001122");
        assert_eq!(draft.set_amount("oops"), Decimal::ZERO);

        draft.select_card("KRT****2231");
        assert_eq!(draft.selected_card(), "KRT****2231");
    }
}
