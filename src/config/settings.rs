use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_DIR: &str = "./planner-data";
pub const DEFAULT_SHARE_BASE_URL: &str = "https://example.com/ice-planner";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    pub storage: Option<StorageSettings>,
    pub share: Option<ShareSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub data_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareSettings {
    pub base_url: String,
}

impl Settings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::InvalidConfigValue {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PLANNER_DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得資料目錄
    pub fn data_dir(&self) -> &str {
        self.storage
            .as_ref()
            .map(|s| s.data_dir.as_str())
            .unwrap_or(DEFAULT_DATA_DIR)
    }

    /// 取得分享連結的基底 URL
    pub fn share_base_url(&self) -> &str {
        self.share
            .as_ref()
            .map(|s| s.base_url.as_str())
            .unwrap_or(DEFAULT_SHARE_BASE_URL)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("storage.data_dir", self.data_dir())?;
        crate::utils::validation::validate_url("share.base_url", self.share_base_url())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_settings() {
        let toml_content = r#"
[storage]
data_dir = "./my-team"

[share]
base_url = "https://hockey.example.org/planner"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.data_dir(), "./my-team");
        assert_eq!(settings.share_base_url(), "https://hockey.example.org/planner");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.data_dir(), DEFAULT_DATA_DIR);
        assert_eq!(settings.share_base_url(), DEFAULT_SHARE_BASE_URL);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_PLANNER_DIR", "./from-env");

        let toml_content = r#"
[storage]
data_dir = "${TEST_PLANNER_DIR}"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.data_dir(), "./from-env");

        std::env::remove_var("TEST_PLANNER_DIR");
    }

    #[test]
    fn test_settings_validation() {
        let toml_content = r#"
[share]
base_url = "invalid-url"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[storage]
data_dir = "./file-test"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.data_dir(), "./file-test");
    }
}
