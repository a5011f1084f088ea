#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::TomlConfig;
pub use crate::core::billing::{affordable_minutes, quote_session, session_cost};
pub use crate::core::level::derive_expert_level;
pub use crate::core::resolver::{credits_per_minute_for_level, lookup_tier, next_tier_progress, resolve_tier};
pub use crate::core::table::{validate_table, BuiltinTiers, TierTable, BUILTIN_TIERS};
pub use crate::domain::model::{
    ExpertStats, LevelRange, ProgressInfo, SessionQuote, Tier, TierLookup, LEVEL_MAX, LEVEL_MIN,
};
pub use crate::domain::ports::TierSource;
pub use crate::utils::error::{Result, TierError};
