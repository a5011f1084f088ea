use crate::core::table::TierTable;
use crate::domain::model::Tier;
use crate::utils::error::{Result, TierError};
use crate::utils::validation::{validate_non_empty_string, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub table: Option<TableInfo>,
    pub tiers: Option<Vec<TierEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierEntry {
    pub name: String,
    pub min: i32,
    pub max: i32,
    pub credits_per_minute: u32,
}

impl From<&TierEntry> for Tier {
    fn from(entry: &TierEntry) -> Self {
        Tier {
            name: Cow::Owned(entry.name.clone()),
            level_range: crate::domain::model::LevelRange::new(entry.min, entry.max),
            credits_per_minute: entry.credits_per_minute,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TierError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TierError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TIER_RATE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TierError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 表格名稱，未設定時為 "custom"
    pub fn table_name(&self) -> &str {
        self.table.as_ref().map(|t| t.name.as_str()).unwrap_or("custom")
    }

    /// 轉換為已驗證的 TierTable
    pub fn to_tier_table(&self) -> Result<TierTable> {
        let entries = validate_required_field("tiers", &self.tiers)?;
        for entry in entries {
            validate_non_empty_string("tiers.name", &entry.name)?;
        }

        let table = TierTable::new(entries.iter().map(Tier::from).collect())?;
        tracing::info!(
            "Loaded tier table '{}' with {} tiers",
            self.table_name(),
            table.len()
        );
        Ok(table)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(info) = &self.table {
            validate_non_empty_string("table.name", &info.name)?;
        }
        self.to_tier_table().map(|_| ())
    }
}
