//! Level to tier resolution over a highest-first tier table.

use crate::core::table::BuiltinTiers;
use crate::domain::model::{ProgressInfo, Tier, TierLookup};
use crate::domain::ports::TierSource;

/// Finds the first tier containing `level`. Levels outside every range
/// report the table's last entry as fallback.
///
/// # Panics
///
/// Panics if `tiers` is empty. Validated tables are never empty.
pub(crate) fn lookup_in(tiers: &[Tier], level: i32) -> TierLookup<'_> {
    match tiers.iter().find(|tier| tier.contains(level)) {
        Some(tier) => TierLookup::Found(tier),
        None => {
            let fallback = tiers.last().expect("tier table cannot be empty");
            tracing::debug!(
                "Level {} is outside every tier, falling back to {}",
                level,
                fallback.name
            );
            TierLookup::OutOfRange { level, fallback }
        }
    }
}

/// Progress toward the next-higher tier.
///
/// # Panics
///
/// Panics if `tiers` is empty, like [`lookup_in`].
pub(crate) fn progress_in(tiers: &[Tier], level: i32) -> ProgressInfo {
    let current = lookup_in(tiers, level).tier();
    // `current` is one of `tiers`, so the position always exists.
    let index = tiers
        .iter()
        .position(|tier| std::ptr::eq(tier, current))
        .unwrap_or(tiers.len() - 1);

    if index == 0 {
        return ProgressInfo {
            current_tier: current.clone(),
            is_max_tier: true,
            progress: 100,
            next_tier: None,
            levels_needed: 0,
        };
    }

    let next = &tiers[index - 1];
    let range = current.level_range;
    let progress = if range.is_single_level() {
        100
    } else {
        let ratio = (i64::from(level) - i64::from(range.min)) as f64
            / (i64::from(range.max) - i64::from(range.min)) as f64;
        (ratio * 100.0).round().clamp(0.0, 100.0) as u8
    };
    let levels_needed = (i64::from(next.level_range.min) - i64::from(level)).max(0) as u32;

    ProgressInfo {
        current_tier: current.clone(),
        is_max_tier: false,
        progress,
        next_tier: Some(next.clone()),
        levels_needed,
    }
}

/// Resolves `level` against the built-in table. Out-of-range levels resolve
/// to Tier 1, the lowest-rate entry; use [`lookup_tier`] to tell the cases apart.
pub fn resolve_tier(level: i32) -> &'static Tier {
    lookup_tier(level).tier()
}

pub fn lookup_tier(level: i32) -> TierLookup<'static> {
    lookup_in(&crate::core::table::BUILTIN_TIERS, level)
}

pub fn credits_per_minute_for_level(level: i32) -> u32 {
    resolve_tier(level).credits_per_minute
}

pub fn next_tier_progress(level: i32) -> ProgressInfo {
    BuiltinTiers.next_tier_progress(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::TierTable;
    use crate::domain::model::{LEVEL_MAX, LEVEL_MIN};

    #[test]
    fn test_every_level_resolves_to_containing_tier() {
        for level in LEVEL_MIN..=LEVEL_MAX {
            let lookup = lookup_tier(level);
            assert!(lookup.is_found(), "level {} fell back", level);
            assert!(lookup.tier().contains(level));
        }
    }

    #[test]
    fn test_resolve_known_levels() {
        let tier = resolve_tier(50);
        assert_eq!(tier.name, "Tier 1 (Lv.1-99)");
        assert_eq!(tier.credits_per_minute, 1000);

        let tier = resolve_tier(450);
        assert_eq!(tier.name, "Tier 5 (Lv.400-499)");
        assert_eq!(tier.credits_per_minute, 3000);

        let tier = resolve_tier(999);
        assert_eq!(tier.name, "Tier 10 (Lv.999)");
        assert_eq!(tier.credits_per_minute, 6000);

        let tier = resolve_tier(950);
        assert_eq!(tier.name, "Tier 10 (Lv.900-998)");
        assert_eq!(tier.credits_per_minute, 5000);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(resolve_tier(99).name, "Tier 1 (Lv.1-99)");
        assert_eq!(resolve_tier(100).name, "Tier 2 (Lv.100-199)");
        assert_eq!(resolve_tier(998).name, "Tier 10 (Lv.900-998)");
    }

    #[test]
    fn test_out_of_range_falls_back_to_last_entry() {
        for level in [0, -5, 1000, i32::MAX, i32::MIN] {
            let lookup = lookup_tier(level);
            assert!(matches!(lookup, TierLookup::OutOfRange { level: l, .. } if l == level));
            assert_eq!(resolve_tier(level).name, "Tier 1 (Lv.1-99)");
            assert_eq!(credits_per_minute_for_level(level), 1000);
        }
    }

    #[test]
    fn test_rate_is_monotonic() {
        let mut previous = 0;
        for level in LEVEL_MIN..=LEVEL_MAX {
            let rate = credits_per_minute_for_level(level);
            assert!(rate >= previous, "rate dropped at level {}", level);
            previous = rate;
        }
    }

    #[test]
    fn test_progress_inside_tier_two() {
        let info = next_tier_progress(150);
        assert!(!info.is_max_tier);
        assert_eq!(info.current_tier.name, "Tier 2 (Lv.100-199)");
        assert_eq!(info.next_tier.unwrap().name, "Tier 3 (Lv.200-299)");
        assert_eq!(info.levels_needed, 50);
        assert_eq!(info.progress, 51);
    }

    #[test]
    fn test_progress_at_band_edges() {
        let info = next_tier_progress(100);
        assert_eq!(info.progress, 0);
        assert_eq!(info.levels_needed, 100);

        let info = next_tier_progress(199);
        assert_eq!(info.progress, 100);
        assert_eq!(info.levels_needed, 1);

        let info = next_tier_progress(998);
        assert!(!info.is_max_tier);
        assert_eq!(info.next_tier.unwrap().name, "Tier 10 (Lv.999)");
        assert_eq!(info.levels_needed, 1);
    }

    #[test]
    fn test_progress_max_tier() {
        let info = next_tier_progress(999);
        assert!(info.is_max_tier);
        assert_eq!(info.progress, 100);
        assert!(info.next_tier.is_none());
        assert_eq!(info.levels_needed, 0);
    }

    #[test]
    fn test_progress_always_within_bounds() {
        for level in LEVEL_MIN..=LEVEL_MAX {
            assert!(next_tier_progress(level).progress <= 100);
        }
        assert_eq!(next_tier_progress(0).progress, 0);
        assert_eq!(next_tier_progress(0).levels_needed, 100);
        assert_eq!(next_tier_progress(5000).progress, 100);
        assert_eq!(next_tier_progress(5000).levels_needed, 0);
    }

    #[test]
    fn test_single_level_band_below_top_is_full() {
        let table = TierTable::new(vec![
            Tier::new("Top", 501, 999, 3000),
            Tier::new("Gate", 500, 500, 2000),
            Tier::new("Base", 1, 499, 1000),
        ])
        .unwrap();

        let info = table.next_tier_progress(500);
        assert!(!info.is_max_tier);
        assert_eq!(info.progress, 100);
        assert_eq!(info.levels_needed, 1);
        assert_eq!(info.next_tier.unwrap().name, "Top");
    }
}
