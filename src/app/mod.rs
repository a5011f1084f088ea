//! Command execution for the `tier-resolve` binary, kept in the library so
//! results can be checked without spawning a process.

use crate::config::{CliConfig, Command};
use crate::core::billing::quote_session;
use crate::core::table::TierTable;
use crate::domain::model::{ExpertStats, ProgressInfo, SessionQuote, Tier};
use crate::domain::ports::TierSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

/// Level derived from activity stats plus the tier it lands in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derived {
    pub level: i32,
    pub tier: Tier,
}

/// Result of one subcommand. Serializes to the bare payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CliOutput {
    Tier(Tier),
    Rate(u32),
    Progress(ProgressInfo),
    Derived(Derived),
    Quote(SessionQuote),
    Table(Vec<Tier>),
}

/// 驗證參數、載入 tier 表並執行子命令
pub fn run(config: &CliConfig) -> Result<CliOutput> {
    config.validate()?;
    let table = config.tier_table()?;
    execute(config, &table)
}

/// Runs the subcommand against an already loaded `table`.
pub fn execute(config: &CliConfig, table: &TierTable) -> Result<CliOutput> {
    let output = match &config.command {
        Command::Resolve { level } => {
            let level = config.level(*level)?;
            let lookup = table.lookup(level);
            if !lookup.is_found() {
                tracing::warn!("Level {} matched no tier, using fallback", level);
            }
            CliOutput::Tier(lookup.tier().clone())
        }
        Command::Rate { level } => {
            CliOutput::Rate(table.credits_per_minute(config.level(*level)?))
        }
        Command::Progress { level } => {
            CliOutput::Progress(table.next_tier_progress(config.level(*level)?))
        }
        Command::Derive { sessions, rating } => {
            let level = ExpertStats::new(*sessions, *rating).level();
            CliOutput::Derived(Derived {
                level,
                tier: table.resolve(level).clone(),
            })
        }
        Command::Quote {
            sessions,
            rating,
            minutes,
        } => CliOutput::Quote(quote_session(
            table,
            ExpertStats::new(*sessions, *rating),
            *minutes,
        )),
        Command::Table => CliOutput::Table(ascending(table)),
    };

    Ok(output)
}

fn ascending(table: &TierTable) -> Vec<Tier> {
    table.ascending().cloned().collect()
}

/// Formats `output` as pretty JSON or as human-readable lines.
pub fn render(output: &CliOutput, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(output)?);
    }

    let text = match output {
        CliOutput::Tier(tier) => describe_tier(tier),
        CliOutput::Rate(rate) => format!("{} credits/min", rate),
        CliOutput::Progress(info) => describe_progress(info),
        CliOutput::Derived(d) => format!("Level {} ({})", d.level, describe_tier(&d.tier)),
        CliOutput::Quote(q) => format!(
            "Level {} {}: {} min x {} credits/min = {} credits",
            q.level, q.tier.name, q.minutes, q.credits_per_minute, q.total_credits
        ),
        CliOutput::Table(tiers) => tiers
            .iter()
            .map(describe_tier)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(text)
}

fn describe_tier(tier: &Tier) -> String {
    format!(
        "{} [{}-{}] {} credits/min",
        tier.name, tier.level_range.min, tier.level_range.max, tier.credits_per_minute
    )
}

fn describe_progress(info: &ProgressInfo) -> String {
    match &info.next_tier {
        None => format!("{}: max tier reached", info.current_tier.name),
        Some(next) => format!(
            "{}: {}% toward {} ({} levels needed)",
            info.current_tier.name, info.progress, next.name, info.levels_needed
        ),
    }
}
