//! Native currency units for the credence ledger.
//!
//! Amounts are fixed-point integers with 24 decimal places. Integer
//! arithmetic at atomic precision keeps fee and reward math deterministic
//! and free of floating-point drift.

use std::fmt;

/// Number of decimal places in the native token.
pub const TOKEN_DECIMALS: u32 = 24;

/// Atomic unit type: 1 token = 10^24 atomic units.
pub type Amount = u128;

/// One whole token in atomic units.
pub const ONE_TOKEN: Amount = 10u128.pow(TOKEN_DECIMALS);

/// Convert a whole-token count into atomic units.
pub const fn tokens(count: u64) -> Amount {
    count as Amount * ONE_TOKEN
}

/// Render an atomic amount as a human-readable token string,
/// e.g. `5 TOKEN` or `1.5 TOKEN`.
pub fn format_amount(amount: Amount) -> String {
    let whole = amount / ONE_TOKEN;
    let frac = amount % ONE_TOKEN;
    if frac == 0 {
        return format!("{whole} TOKEN");
    }
    let frac = format!("{frac:0>width$}", width = TOKEN_DECIMALS as usize);
    format!("{whole}.{} TOKEN", frac.trim_end_matches('0'))
}

/// Wrapper for displaying amounts inside format strings.
pub struct DisplayAmount(pub Amount);

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_token_is_ten_to_the_24() {
        assert_eq!(ONE_TOKEN, 1_000_000_000_000_000_000_000_000);
        assert_eq!(tokens(5), 5 * ONE_TOKEN);
    }

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_amount(tokens(5)), "5 TOKEN");
        assert_eq!(format_amount(0), "0 TOKEN");
        assert_eq!(format_amount(ONE_TOKEN + ONE_TOKEN / 2), "1.5 TOKEN");
        assert_eq!(format_amount(1), "0.000000000000000000000001 TOKEN");
    }
}
