use crate::domain::model::{ExpertStats, LEVEL_MAX, LEVEL_MIN};

/// `clamp(1, 999, floor(sessions / 10) + floor(rating * 10))`.
///
/// Total over all inputs: a NaN rating contributes nothing and infinite
/// ratings saturate before clamping.
pub fn derive_expert_level(total_sessions: u32, avg_rating: f64) -> i32 {
    let from_sessions = i64::from(total_sessions / 10);
    // `as` saturates and maps NaN to 0
    let from_rating = (avg_rating * 10.0).floor() as i64;
    from_sessions
        .saturating_add(from_rating)
        .clamp(i64::from(LEVEL_MIN), i64::from(LEVEL_MAX)) as i32
}

impl ExpertStats {
    pub fn level(&self) -> i32 {
        derive_expert_level(self.total_sessions, self.avg_rating)
    }
}
