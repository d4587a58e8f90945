//! The mock wallet-balance lookup.
//!
//! The page presents a "check your rewards" form, but there is no
//! chain to query: the lookup ignores the submitted address entirely
//! and fabricates both balances from the RNG. This is intentional and
//! must stay that way until the real rewards contract is live.

use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Exclusive upper bound for the fabricated TEDDI balance.
pub const MAX_TOKEN_BALANCE: u64 = 1_000_000;
/// Exclusive upper bound for the fabricated Teddy rewards balance.
pub const MAX_REWARD_BALANCE: u64 = 10_000;

/// The result of one balance check. Ephemeral: regenerated on every
/// submit, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub token_balance: u64,
    pub reward_balance: u64,
}

impl BalanceReport {
    /// Produces a fresh report for the given address.
    ///
    /// The address is not validated and not used; it exists only so
    /// the call site reads like a real lookup.
    pub fn lookup<R: Rng + ?Sized>(rng: &mut R, _address: &str) -> Self {
        Self {
            token_balance: rng.random_range(0..MAX_TOKEN_BALANCE),
            reward_balance: rng.random_range(0..MAX_REWARD_BALANCE),
        }
    }

    /// Whether the results block should be shown.
    ///
    /// A genuine zero token balance hides the block, exactly like the
    /// pre-first-submit state. Preserved as-is rather than "fixed".
    pub fn is_displayable(&self) -> bool {
        self.token_balance > 0
    }
}

/// Formats an integer with comma thousands separators, e.g. `1,234,567`.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lookup_stays_in_bounds_for_any_address() {
        let mut rng = StdRng::seed_from_u64(7);
        for address in ["", "0xDEADBEEF", "not an address at all", "🐻"] {
            for _ in 0..200 {
                let report = BalanceReport::lookup(&mut rng, address);
                assert!(report.token_balance < MAX_TOKEN_BALANCE);
                assert!(report.reward_balance < MAX_REWARD_BALANCE);
            }
        }
    }

    #[test]
    fn report_is_displayable_iff_token_balance_positive() {
        let zero = BalanceReport {
            token_balance: 0,
            reward_balance: 5_000,
        };
        assert!(!zero.is_displayable());

        let one = BalanceReport {
            token_balance: 1,
            reward_balance: 0,
        };
        assert!(one.is_displayable());
    }

    #[test]
    fn grouping_inserts_commas_every_three_digits() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(999_999), "999,999");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }
}
