use crate::config::toml_config::TomlConfig;
use crate::core::table::TierTable;
use crate::utils::error::Result;
use crate::utils::validation::{validate_level, validate_rating, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "tier-resolve")]
#[command(about = "Resolve ConsultOn expert tiers and credit rates")]
pub struct CliConfig {
    /// Path to a TOML tier table that replaces the built-in one
    #[arg(long, global = true)]
    pub tiers: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Resolve out-of-range levels to the lowest tier instead of failing
    #[arg(long, global = true)]
    pub allow_fallback: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the tier a level belongs to
    Resolve {
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
    /// Show the credits-per-minute rate for a level
    Rate {
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
    /// Show progress toward the next tier
    Progress {
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
    /// Derive a level from session count and average rating
    Derive {
        #[arg(long)]
        sessions: u32,
        #[arg(long)]
        rating: f64,
    },
    /// Price a consultation
    Quote {
        #[arg(long)]
        sessions: u32,
        #[arg(long)]
        rating: f64,
        #[arg(long)]
        minutes: u32,
    },
    /// Print the active tier table
    Table,
}

impl CliConfig {
    /// 載入使用中的 tier 表格 (自訂檔案或內建)
    pub fn tier_table(&self) -> Result<TierTable> {
        match &self.tiers {
            Some(path) => {
                tracing::debug!("Loading tier table from {}", path);
                TomlConfig::from_file(path)?.to_tier_table()
            }
            None => Ok(TierTable::builtin()),
        }
    }

    /// 依 --allow-fallback 決定是否驗證等級
    pub fn level(&self, level: i64) -> Result<i32> {
        if self.allow_fallback {
            return Ok(level.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);
        }
        validate_level(level)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Resolve { level } | Command::Rate { level } | Command::Progress { level } => {
                self.level(*level).map(|_| ())
            }
            Command::Derive { rating, .. } | Command::Quote { rating, .. } => {
                validate_rating("rating", *rating)
            }
            Command::Table => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TierError;

    #[test]
    fn test_parse_resolve() {
        let config = CliConfig::try_parse_from(["tier-resolve", "resolve", "450"]).unwrap();
        assert!(matches!(config.command, Command::Resolve { level: 450 }));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_rejected_without_fallback() {
        let config = CliConfig::try_parse_from(["tier-resolve", "rate", "1000"]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(TierError::InvalidLevel { level: 1000 })
        ));
    }

    #[test]
    fn test_out_of_range_allowed_with_fallback() {
        let config =
            CliConfig::try_parse_from(["tier-resolve", "--allow-fallback", "rate", "1000"]).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.level(1000).unwrap(), 1000);
    }

    #[test]
    fn test_negative_level_parses() {
        let config =
            CliConfig::try_parse_from(["tier-resolve", "progress", "-5"]).unwrap();
        assert!(matches!(config.command, Command::Progress { level: -5 }));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_quote_rating_validated() {
        let config = CliConfig::try_parse_from([
            "tier-resolve",
            "quote",
            "--sessions",
            "100",
            "--rating",
            "7.5",
            "--minutes",
            "30",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builtin_table_by_default() {
        let config = CliConfig::try_parse_from(["tier-resolve", "table"]).unwrap();
        assert_eq!(config.tier_table().unwrap(), TierTable::builtin());
    }
}
