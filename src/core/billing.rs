use crate::domain::model::{ExpertStats, SessionQuote};
use crate::domain::ports::TierSource;

/// Credits charged for `minutes` with an expert at `level`.
pub fn session_cost(source: &impl TierSource, level: i32, minutes: u32) -> u64 {
    u64::from(source.credits_per_minute(level)) * u64::from(minutes)
}

/// Whole minutes a `balance` of credits buys at `level`'s rate.
pub fn affordable_minutes(source: &impl TierSource, level: i32, balance: u64) -> u64 {
    balance / u64::from(source.credits_per_minute(level).max(1))
}

pub fn quote_session(source: &impl TierSource, stats: ExpertStats, minutes: u32) -> SessionQuote {
    let level = stats.level();
    let tier = source.resolve(level).clone();
    let credits_per_minute = tier.credits_per_minute;
    let total_credits = u64::from(credits_per_minute) * u64::from(minutes);

    tracing::debug!(
        "Quoted {} min with level {} expert ({}): {} credits",
        minutes,
        level,
        tier.name,
        total_credits
    );

    SessionQuote {
        level,
        tier,
        credits_per_minute,
        minutes,
        total_credits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::BuiltinTiers;

    #[test]
    fn test_session_cost() {
        assert_eq!(session_cost(&BuiltinTiers, 450, 30), 90_000);
        assert_eq!(session_cost(&BuiltinTiers, 999, 0), 0);
    }

    #[test]
    fn test_affordable_minutes_floors() {
        assert_eq!(affordable_minutes(&BuiltinTiers, 50, 2_999), 2);
        assert_eq!(affordable_minutes(&BuiltinTiers, 999, 5_999), 0);
        assert_eq!(affordable_minutes(&BuiltinTiers, 999, 60_000), 10);
    }

    #[test]
    fn test_quote_uses_derived_level() {
        // 2500/10 + floor(4.2*10) = 250 + 42 = 292 -> Tier 3
        let quote = quote_session(&BuiltinTiers, ExpertStats::new(2500, 4.2), 15);
        assert_eq!(quote.level, 292);
        assert_eq!(quote.tier.name, "Tier 3 (Lv.200-299)");
        assert_eq!(quote.credits_per_minute, 2000);
        assert_eq!(quote.total_credits, 30_000);
    }
}
