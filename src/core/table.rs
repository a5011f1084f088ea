use crate::domain::model::{Tier, LEVEL_MAX, LEVEL_MIN};
use crate::domain::ports::TierSource;
use crate::utils::error::{Result, TierError};
use crate::utils::validation::Validate;

/// Built-in ConsultOn tiers, highest first. The last entry is the
/// fallback for levels no range covers.
pub static BUILTIN_TIERS: [Tier; 11] = [
    Tier::new("Tier 10 (Lv.999)", 999, 999, 6000),
    Tier::new("Tier 10 (Lv.900-998)", 900, 998, 5000),
    Tier::new("Tier 9 (Lv.800-899)", 800, 899, 4800),
    Tier::new("Tier 8 (Lv.700-799)", 700, 799, 4500),
    Tier::new("Tier 7 (Lv.600-699)", 600, 699, 4000),
    Tier::new("Tier 6 (Lv.500-599)", 500, 599, 3500),
    Tier::new("Tier 5 (Lv.400-499)", 400, 499, 3000),
    Tier::new("Tier 4 (Lv.300-399)", 300, 399, 2500),
    Tier::new("Tier 3 (Lv.200-299)", 200, 299, 2000),
    Tier::new("Tier 2 (Lv.100-199)", 100, 199, 1500),
    Tier::new("Tier 1 (Lv.1-99)", 1, 99, 1000),
];

/// The static built-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTiers;

impl TierSource for BuiltinTiers {
    fn tiers(&self) -> &[Tier] {
        &BUILTIN_TIERS
    }
}

/// An owned table that has passed [`validate_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    pub fn new(tiers: Vec<Tier>) -> Result<Self> {
        validate_table(&tiers)?;
        Ok(Self { tiers })
    }

    pub fn builtin() -> Self {
        Self {
            tiers: BUILTIN_TIERS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Lowest tier first.
    pub fn ascending(&self) -> impl Iterator<Item = &Tier> {
        self.tiers.iter().rev()
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TierSource for TierTable {
    fn tiers(&self) -> &[Tier] {
        &self.tiers
    }
}

impl Validate for TierTable {
    fn validate(&self) -> Result<()> {
        validate_table(&self.tiers)
    }
}

fn invalid(reason: String) -> TierError {
    TierError::InvalidTable { reason }
}

/// Checks that `tiers` is ordered highest first, partitions 1..=999 without
/// gaps or overlaps, and bills strictly more per minute at each step up.
pub fn validate_table(tiers: &[Tier]) -> Result<()> {
    let (first, last) = match (tiers.first(), tiers.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(invalid("table has no tiers".to_string())),
    };

    for tier in tiers {
        if tier.name.trim().is_empty() {
            return Err(invalid("tier name cannot be empty".to_string()));
        }
        if tier.level_range.min > tier.level_range.max {
            return Err(invalid(format!(
                "'{}' has min {} above max {}",
                tier.name, tier.level_range.min, tier.level_range.max
            )));
        }
        if tier.level_range.min < LEVEL_MIN || tier.level_range.max > LEVEL_MAX {
            return Err(invalid(format!(
                "'{}' ({}-{}) reaches outside levels {}-{}",
                tier.name, tier.level_range.min, tier.level_range.max, LEVEL_MIN, LEVEL_MAX
            )));
        }
        if tier.credits_per_minute == 0 {
            return Err(invalid(format!(
                "'{}' must bill a positive rate",
                tier.name
            )));
        }
    }

    if first.level_range.max != LEVEL_MAX {
        return Err(invalid(format!(
            "highest tier '{}' ends at {} instead of {}",
            first.name, first.level_range.max, LEVEL_MAX
        )));
    }
    if last.level_range.min != LEVEL_MIN {
        return Err(invalid(format!(
            "lowest tier '{}' starts at {} instead of {}",
            last.name, last.level_range.min, LEVEL_MIN
        )));
    }

    for pair in tiers.windows(2) {
        let (higher, lower) = (&pair[0], &pair[1]);
        if i64::from(higher.level_range.min) != i64::from(lower.level_range.max) + 1 {
            return Err(invalid(format!(
                "'{}' ({}-{}) does not continue directly from '{}' ({}-{})",
                higher.name,
                higher.level_range.min,
                higher.level_range.max,
                lower.name,
                lower.level_range.min,
                lower.level_range.max
            )));
        }
        if higher.credits_per_minute <= lower.credits_per_minute {
            return Err(invalid(format!(
                "'{}' bills {} which is not above '{}' at {}",
                higher.name, higher.credits_per_minute, lower.name, lower.credits_per_minute
            )));
        }
    }

    Ok(())
}
