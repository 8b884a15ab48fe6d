//! 탐지 규칙 테이블 — 카테고리별 윈도우와 임계값
//!
//! 세 규칙은 상수만 다르고 모양이 같습니다. 규칙은 제품 정책이므로
//! 설정 파일이 아니라 코드에 고정되어 있습니다.
//!
//! | 카테고리        | 윈도우  | 임계값 | 알림 설명                        |
//! |-----------------|---------|--------|----------------------------------|
//! | FailedLogin     | 1시간   | >= 10  | "Brute Force pattern detected"   |
//! | PortScan        | 1일     | >= 20  | "Port Scanning pattern detected" |
//! | HighRequestRate | 1분     | >= 20  | "DDoS pattern detected"          |

use logwarden_core::types::EventCategory;

/// 탐지 규칙 — 윈도우 길이(초)와 발화 임계값
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// 윈도우 길이 (초)
    pub window_secs: i64,
    /// 윈도우 내 발화에 필요한 최소 이벤트 수
    pub threshold: u64,
}

impl Rule {
    /// 카테고리에 대응하는 규칙을 반환합니다.
    pub const fn for_category(category: EventCategory) -> Self {
        match category {
            EventCategory::FailedLogin => Self {
                window_secs: 3600,
                threshold: 10,
            },
            EventCategory::PortScan => Self {
                window_secs: 86_400,
                threshold: 20,
            },
            EventCategory::HighRequestRate => Self {
                window_secs: 60,
                threshold: 20,
            },
        }
    }

    /// 전체 규칙 테이블 (규칙 목록 출력용)
    pub const fn table() -> [(EventCategory, Rule); 3] {
        [
            (
                EventCategory::FailedLogin,
                Self::for_category(EventCategory::FailedLogin),
            ),
            (
                EventCategory::PortScan,
                Self::for_category(EventCategory::PortScan),
            ),
            (
                EventCategory::HighRequestRate,
                Self::for_category(EventCategory::HighRequestRate),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_login_rule_constants() {
        let rule = Rule::for_category(EventCategory::FailedLogin);
        assert_eq!(rule.window_secs, 3600);
        assert_eq!(rule.threshold, 10);
    }

    #[test]
    fn port_scan_rule_constants() {
        let rule = Rule::for_category(EventCategory::PortScan);
        assert_eq!(rule.window_secs, 86_400);
        assert_eq!(rule.threshold, 20);
    }

    #[test]
    fn high_request_rate_rule_constants() {
        let rule = Rule::for_category(EventCategory::HighRequestRate);
        assert_eq!(rule.window_secs, 60);
        assert_eq!(rule.threshold, 20);
    }

    #[test]
    fn table_covers_all_categories() {
        let table = Rule::table();
        assert_eq!(table.len(), 3);
        for (category, rule) in table {
            assert_eq!(rule, Rule::for_category(category));
        }
    }
}
