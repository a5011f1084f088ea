use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// 等級空間下限
pub const LEVEL_MIN: i32 = 1;
/// 等級空間上限
pub const LEVEL_MAX: i32 = 999;

/// Inclusive level bounds covered by a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    pub min: i32,
    pub max: i32,
}

impl LevelRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, level: i32) -> bool {
        self.min <= level && level <= self.max
    }

    /// A band that covers exactly one level (e.g. the Lv.999 band).
    pub fn is_single_level(&self) -> bool {
        self.min == self.max
    }
}

/// A named pricing band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub name: Cow<'static, str>,
    #[serde(flatten)]
    pub level_range: LevelRange,
    pub credits_per_minute: u32,
}

impl Tier {
    pub const fn new(name: &'static str, min: i32, max: i32, credits_per_minute: u32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            level_range: LevelRange::new(min, max),
            credits_per_minute,
        }
    }

    pub fn contains(&self, level: i32) -> bool {
        self.level_range.contains(level)
    }
}

/// Result of a table lookup. `OutOfRange` carries the tier that
/// `resolve_tier` falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierLookup<'a> {
    Found(&'a Tier),
    OutOfRange { level: i32, fallback: &'a Tier },
}

impl<'a> TierLookup<'a> {
    pub fn tier(&self) -> &'a Tier {
        match *self {
            TierLookup::Found(tier) => tier,
            TierLookup::OutOfRange { fallback, .. } => fallback,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, TierLookup::Found(_))
    }
}

/// How far an expert is from the next-higher tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressInfo {
    pub current_tier: Tier,
    pub is_max_tier: bool,
    /// 0..=100
    pub progress: u8,
    pub next_tier: Option<Tier>,
    pub levels_needed: u32,
}

/// Activity stats an expert level is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpertStats {
    pub total_sessions: u32,
    pub avg_rating: f64,
}

impl ExpertStats {
    pub fn new(total_sessions: u32, avg_rating: f64) -> Self {
        Self {
            total_sessions,
            avg_rating,
        }
    }
}

/// Priced consultation for a given expert and duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionQuote {
    pub level: i32,
    pub tier: Tier,
    pub credits_per_minute: u32,
    pub minutes: u32,
    pub total_credits: u64,
}
