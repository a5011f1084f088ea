use crate::domain::model::{ProgressInfo, Tier, TierLookup};

/// Anything that can hand out an ordered, highest-first tier table.
///
/// The provided methods implement resolution and progress on top of
/// [`TierSource::tiers`]; implementors only supply the table.
pub trait TierSource: Send + Sync {
    fn tiers(&self) -> &[Tier];

    fn lookup(&self, level: i32) -> TierLookup<'_> {
        crate::core::resolver::lookup_in(self.tiers(), level)
    }

    fn resolve(&self, level: i32) -> &Tier {
        self.lookup(level).tier()
    }

    fn credits_per_minute(&self, level: i32) -> u32 {
        self.resolve(level).credits_per_minute
    }

    fn next_tier_progress(&self, level: i32) -> ProgressInfo {
        crate::core::resolver::progress_in(self.tiers(), level)
    }
}
