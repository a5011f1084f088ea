pub mod billing;
pub mod level;
pub mod resolver;
pub mod table;

pub use crate::domain::model::{
    ExpertStats, LevelRange, ProgressInfo, SessionQuote, Tier, TierLookup,
};
pub use crate::domain::ports::TierSource;
pub use crate::utils::error::Result;
