//! 설정 관리 — logwarden.toml 파싱 및 런타임 설정
//!
//! [`WardenConfig`]는 모든 크레이트의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`LOGWARDEN_GENERAL_LOG_LEVEL=debug` 형식)
//! 3. 설정 파일 (`logwarden.toml`)
//! 4. 기본값 (`Default` 구현)

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, WardenError};

/// Logwarden 통합 설정
///
/// `logwarden.toml` 파일의 최상위 구조를 나타냅니다.
/// 각 크레이트는 자기 섹션만 읽어 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WardenConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 라인 추출기 설정
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// 일반 설정 (로깅)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 출력 형식 ("json" 또는 "pretty")
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 라인 추출기 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// 타임스탬프 형식 (chrono strftime, 로그의 첫 두 토큰에 적용)
    pub timestamp_format: String,
    /// 최대 라인 길이 (바이트)
    pub max_line_length: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_owned(),
            max_line_length: 64 * 1024,
        }
    }
}

impl WardenConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, WardenError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 파일이 없으면 기본값으로 대체하는 로딩 변형입니다.
    ///
    /// 기본 경로의 설정 파일은 선택 사항이므로 CLI에서 사용합니다.
    /// 환경변수 오버라이드는 두 경우 모두 적용됩니다.
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self, WardenError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path).await
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            let mut config = Self::default();
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, WardenError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WardenError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                WardenError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, WardenError> {
        toml::from_str(toml_str).map_err(|e| {
            WardenError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `LOGWARDEN_{SECTION}_{FIELD}`
    pub fn apply_env_overrides(&mut self) {
        override_string(&mut self.general.log_level, "LOGWARDEN_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "LOGWARDEN_GENERAL_LOG_FORMAT");
        override_string(
            &mut self.extractor.timestamp_format,
            "LOGWARDEN_EXTRACTOR_TIMESTAMP_FORMAT",
        );
        override_usize(
            &mut self.extractor.max_line_length,
            "LOGWARDEN_EXTRACTOR_MAX_LINE_LENGTH",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), WardenError> {
        if self.general.log_format != "json" && self.general.log_format != "pretty" {
            return Err(WardenError::Config(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!(
                    "unknown format '{}', expected 'json' or 'pretty'",
                    self.general.log_format
                ),
            }));
        }

        if self.extractor.timestamp_format.is_empty() {
            return Err(WardenError::Config(ConfigError::InvalidValue {
                field: "extractor.timestamp_format".to_owned(),
                reason: "must not be empty".to_owned(),
            }));
        }

        if self.extractor.max_line_length == 0 {
            return Err(WardenError::Config(ConfigError::InvalidValue {
                field: "extractor.max_line_length".to_owned(),
                reason: "must be greater than 0".to_owned(),
            }));
        }

        Ok(())
    }
}

/// 환경변수가 있으면 문자열 필드를 덮어씁니다.
fn override_string(field: &mut String, var: &str) {
    if let Ok(value) = std::env::var(var) {
        *field = value;
    }
}

/// 환경변수가 있으면 usize 필드를 덮어씁니다. 파싱 실패는 무시합니다.
fn override_usize(field: &mut usize, var: &str) {
    if let Ok(value) = std::env::var(var)
        && let Ok(parsed) = value.parse()
    {
        *field = parsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn default_config_is_valid() {
        WardenConfig::default().validate().unwrap();
    }

    #[test]
    fn parse_minimal_toml() {
        let config = WardenConfig::parse("[general]\nlog_level = \"debug\"\nlog_format = \"json\"")
            .unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.log_format, "json");
        // 생략된 섹션은 기본값
        assert_eq!(config.extractor.max_line_length, 64 * 1024);
    }

    #[test]
    fn parse_empty_toml_yields_defaults() {
        let config = WardenConfig::parse("").unwrap();
        assert_eq!(config, WardenConfig::default());
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        assert!(WardenConfig::parse("[general\nlog_level=").is_err());
    }

    #[test]
    fn validate_rejects_unknown_log_format() {
        let config = WardenConfig {
            general: GeneralConfig {
                log_format: "xml".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_max_line_length() {
        let config = WardenConfig {
            extractor: ExtractorConfig {
                max_line_length: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_timestamp_format() {
        let config = WardenConfig {
            extractor: ExtractorConfig {
                timestamp_format: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn from_file_missing_reports_file_not_found() {
        let err = WardenConfig::from_file("/nonexistent/logwarden.toml")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WardenError::Config(ConfigError::FileNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn load_or_default_missing_falls_back() {
        let config = WardenConfig::load_or_default("/nonexistent/logwarden.toml")
            .await
            .unwrap();
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    #[serial]
    fn env_override_log_level() {
        unsafe { std::env::set_var("LOGWARDEN_GENERAL_LOG_LEVEL", "trace") };
        let mut config = WardenConfig::default();
        config.apply_env_overrides();
        unsafe { std::env::remove_var("LOGWARDEN_GENERAL_LOG_LEVEL") };
        assert_eq!(config.general.log_level, "trace");
    }

    #[test]
    #[serial]
    fn env_override_max_line_length() {
        unsafe { std::env::set_var("LOGWARDEN_EXTRACTOR_MAX_LINE_LENGTH", "1024") };
        let mut config = WardenConfig::default();
        config.apply_env_overrides();
        unsafe { std::env::remove_var("LOGWARDEN_EXTRACTOR_MAX_LINE_LENGTH") };
        assert_eq!(config.extractor.max_line_length, 1024);
    }

    #[test]
    #[serial]
    fn env_override_ignores_unparseable_usize() {
        unsafe { std::env::set_var("LOGWARDEN_EXTRACTOR_MAX_LINE_LENGTH", "not-a-number") };
        let mut config = WardenConfig::default();
        config.apply_env_overrides();
        unsafe { std::env::remove_var("LOGWARDEN_EXTRACTOR_MAX_LINE_LENGTH") };
        assert_eq!(config.extractor.max_line_length, 64 * 1024);
    }
}
