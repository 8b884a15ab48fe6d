//! 접근 로그 라인 추출기
//!
//! 고정 레이아웃(한 줄 = 한 이벤트)의 접근 로그에서 이벤트 레코드를
//! 추출합니다. 타임스탬프는 첫 두 공백 구분 토큰, 주소는 마지막
//! 토큰, 카테고리는 부분 문자열 매칭으로 판별합니다.
//!
//! # 드롭과 거부
//!
//! - 빈 라인, 토큰 3개 미만, 인식되지 않는 카테고리: 조용히 드롭
//!   (`Ok(None)`, 에러 아님)
//! - 타임스탬프 형식 위반, 라인 길이 초과: 거부 (`Err`) — 엔진에
//!   도달하기 전에 걸러지며 실행은 계속됩니다

use chrono::NaiveDateTime;

use logwarden_core::config::ExtractorConfig;
use logwarden_core::error::{ExtractError, WardenError};
use logwarden_core::pipeline::Extractor;
use logwarden_core::types::{EventCategory, EventRecord};

/// 고정 레이아웃 접근 로그 추출기
///
/// core의 [`Extractor`] trait을 구현합니다.
pub struct AccessLogExtractor {
    /// 타임스탬프 형식 (chrono strftime)
    timestamp_format: String,
    /// 최대 허용 라인 길이 (바이트)
    max_line_length: usize,
}

impl AccessLogExtractor {
    /// 기본 설정으로 새 추출기를 생성합니다.
    pub fn new() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }

    /// 설정에서 추출기를 생성합니다.
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            timestamp_format: config.timestamp_format.clone(),
            max_line_length: config.max_line_length,
        }
    }

    fn extract_inner(&self, line: &str) -> Result<Option<EventRecord>, ExtractError> {
        if line.len() > self.max_line_length {
            return Err(ExtractError::LineTooLong {
                length: line.len(),
                max: self.max_line_length,
            });
        }

        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Ok(None);
        }

        let Some(category) = EventCategory::match_line(line) else {
            return Ok(None);
        };

        let token = format!("{} {}", fields[0], fields[1]);
        let timestamp = NaiveDateTime::parse_from_str(&token, &self.timestamp_format).map_err(
            |e| ExtractError::MalformedTimestamp {
                token,
                reason: e.to_string(),
            },
        )?;

        let address = fields[fields.len() - 1].to_owned();

        Ok(Some(EventRecord {
            address,
            timestamp,
            category,
        }))
    }
}

impl Default for AccessLogExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for AccessLogExtractor {
    fn name(&self) -> &str {
        "access-log"
    }

    fn extract(&self, line: &str) -> Result<Option<EventRecord>, WardenError> {
        self.extract_inner(line).map_err(WardenError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(line: &str) -> Result<Option<EventRecord>, WardenError> {
        AccessLogExtractor::new().extract(line)
    }

    #[test]
    fn extracts_failed_login_line() {
        let record = extract("2023-03-01 09:00:00 Failed Login attempt from 10.0.0.1")
            .unwrap()
            .unwrap();
        assert_eq!(record.category, EventCategory::FailedLogin);
        assert_eq!(record.address, "10.0.0.1");
        assert_eq!(
            record.timestamp,
            NaiveDateTime::parse_from_str("2023-03-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
        );
    }

    #[test]
    fn extracts_port_scanning_line() {
        let record = extract("2023-03-01 12:30:45 Port scanning activity from 172.16.0.2")
            .unwrap()
            .unwrap();
        assert_eq!(record.category, EventCategory::PortScan);
        assert_eq!(record.address, "172.16.0.2");
    }

    #[test]
    fn extracts_request_line() {
        let record = extract("2023-03-01 12:30:45 Request GET /index 192.168.1.50")
            .unwrap()
            .unwrap();
        assert_eq!(record.category, EventCategory::HighRequestRate);
        assert_eq!(record.address, "192.168.1.50");
    }

    #[test]
    fn address_is_last_token() {
        let record = extract("2023-03-01 09:00:00 Failed Login for user admin from host 10.9.8.7")
            .unwrap()
            .unwrap();
        assert_eq!(record.address, "10.9.8.7");
    }

    #[test]
    fn empty_line_is_dropped() {
        assert!(extract("").unwrap().is_none());
        assert!(extract("   \t  ").unwrap().is_none());
    }

    #[test]
    fn short_line_is_dropped() {
        assert!(extract("Failed Login").unwrap().is_none());
    }

    #[test]
    fn unrecognized_category_is_dropped() {
        assert!(
            extract("2023-03-01 09:00:00 session opened for user root 10.0.0.1")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        let err = extract("not-a-date also-not-a-time Failed Login from 10.0.0.1").unwrap_err();
        assert!(matches!(
            err,
            WardenError::Extract(ExtractError::MalformedTimestamp { .. })
        ));
    }

    #[test]
    fn oversized_line_is_rejected() {
        let extractor = AccessLogExtractor::from_config(&ExtractorConfig {
            max_line_length: 32,
            ..Default::default()
        });
        let line = format!("2023-03-01 09:00:00 Failed Login {}", "x".repeat(64));
        let err = extractor.extract(&line).unwrap_err();
        assert!(matches!(
            err,
            WardenError::Extract(ExtractError::LineTooLong { .. })
        ));
    }

    #[test]
    fn custom_timestamp_format() {
        let extractor = AccessLogExtractor::from_config(&ExtractorConfig {
            timestamp_format: "%d/%m/%Y %H:%M".to_owned(),
            ..Default::default()
        });
        let record = extractor
            .extract("01/03/2023 09:15 Failed Login from 10.0.0.1")
            .unwrap()
            .unwrap();
        assert_eq!(record.timestamp.format("%Y-%m-%d").to_string(), "2023-03-01");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// 임의 입력에 대해 추출기는 패닉 없이 Ok 또는 Err을 반환합니다.
            #[test]
            fn extract_never_panics(line in ".{0,256}") {
                let _ = AccessLogExtractor::new().extract(&line);
            }

            /// 추출에 성공하면 주소는 항상 라인의 마지막 토큰입니다.
            #[test]
            fn address_matches_last_token(addr in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}") {
                let line = format!("2023-03-01 09:00:00 Failed Login from {addr}");
                let record = AccessLogExtractor::new().extract(&line).unwrap().unwrap();
                prop_assert_eq!(record.address, addr);
            }
        }
    }
}
