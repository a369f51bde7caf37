//! Display-side recalculation of trade amount fields.
//!
//! The server recomputes these on submit; this mirror only keeps the
//! gross/net inputs consistent while the user types.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeSide {
    Entry,
    Exit,
}

impl TradeSide {
    /// Form fields that feed the recalculation.
    pub const INPUT_FIELDS: [&'static str; 4] = ["quantity", "price", "fee", "tax"];
    /// Computed fields written back into the form.
    pub const GROSS_FIELD: &'static str = "gross_amount";
    pub const NET_FIELD: &'static str = "net_amount";
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeAmounts {
    pub gross: f64,
    pub net: f64,
}

impl TradeAmounts {
    pub fn gross_display(&self) -> String {
        format_amount(self.gross)
    }

    pub fn net_display(&self) -> String {
        format_amount(self.net)
    }
}

/// Parse a raw input value; empty, non-numeric or non-finite input counts
/// as zero, never as an error.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// gross = quantity x price; fees and taxes increase the entry net and
/// decrease the exit net.
pub fn recalc(side: TradeSide, quantity: f64, price: f64, fee: f64, tax: f64) -> TradeAmounts {
    let gross = quantity * price;
    let net = match side {
        TradeSide::Entry => gross + fee + tax,
        TradeSide::Exit => gross - fee - tax,
    };
    TradeAmounts { gross, net }
}

/// Amount fields always display two decimal places.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_adds_costs() {
        let amounts = recalc(TradeSide::Entry, 10.0, 5.0, 1.0, 1.0);
        assert_eq!(amounts.gross_display(), "50.00");
        assert_eq!(amounts.net_display(), "52.00");
    }

    #[test]
    fn test_exit_subtracts_costs() {
        let amounts = recalc(TradeSide::Exit, 10.0, 5.0, 1.0, 1.0);
        assert_eq!(amounts.gross_display(), "50.00");
        assert_eq!(amounts.net_display(), "48.00");
    }

    #[test]
    fn test_parse_amount_defaults_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("1.5.2"), 0.0);
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(" 7 "), 7.0);
        assert_eq!(parse_amount("-3.25"), -3.25);
    }

    #[test]
    fn test_non_finite_input_counts_as_zero() {
        // f64::from_str accepts these spellings; the form fields never may.
        assert_eq!(parse_amount("nan"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-inf"), 0.0);
        assert_eq!(parse_amount("infinity"), 0.0);

        let amounts = recalc(TradeSide::Entry, parse_amount("nan"), 5.0, 0.0, 0.0);
        assert_eq!(amounts.net_display(), "0.00");
    }

    #[test]
    fn test_blank_quantity_zeroes_gross() {
        let amounts = recalc(TradeSide::Entry, parse_amount(""), 5.0, 0.0, 0.0);
        assert_eq!(amounts.gross_display(), "0.00");
        assert_eq!(amounts.net_display(), "0.00");
    }

    #[test]
    fn test_two_decimal_rounding() {
        let amounts = recalc(TradeSide::Entry, 3.0, 1.333, 0.0, 0.0);
        assert_eq!(amounts.gross_display(), "4.00");
        assert_eq!(format_amount(2.675), "2.67");
        assert_eq!(format_amount(-1.0), "-1.00");
    }
}
