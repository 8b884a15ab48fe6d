//! 도메인 타입 — 시스템 전역에서 사용되는 공통 타입
//!
//! 추출기와 탐지 엔진이 교환하는 데이터 구조를 정의합니다.
//! 원시 로그 라인은 [`EventRecord`]로 축약되고, 탐지 엔진은
//! [`AlertRecord`] 집합을 출력합니다.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 이벤트 카테고리 — 탐지 대상 행위 유형
///
/// 닫힌 집합입니다. 인식되지 않는 라인은 추출 단계에서 `None`으로
/// 걸러지므로 엔진은 이 세 가지 외의 값을 볼 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// 로그인 실패 — 크리덴셜 무차별 대입 의심
    FailedLogin,
    /// 포트 스캔 시도
    PortScan,
    /// 비정상적으로 높은 요청 빈도
    HighRequestRate,
}

impl EventCategory {
    /// 원시 로그 라인에서 카테고리를 부분 문자열 매칭으로 판별합니다.
    ///
    /// 키워드는 선언 순서대로 검사합니다. `"Request"`는 가장 일반적인
    /// 키워드이므로 마지막에 검사합니다.
    pub fn match_line(line: &str) -> Option<Self> {
        if line.contains("Failed Login") {
            Some(Self::FailedLogin)
        } else if line.contains("Port scanning") {
            Some(Self::PortScan)
        } else if line.contains("Request") {
            Some(Self::HighRequestRate)
        } else {
            None
        }
    }

    /// 패턴 이름 (알림 본문과 규칙 목록에 표시)
    pub fn pattern_name(self) -> &'static str {
        match self {
            Self::FailedLogin => "Brute Force",
            Self::PortScan => "Port Scanning",
            Self::HighRequestRate => "DDoS",
        }
    }

    /// 알림 레코드에 들어가는 설명 문자열
    pub fn alert_description(self) -> &'static str {
        match self {
            Self::FailedLogin => "Brute Force pattern detected",
            Self::PortScan => "Port Scanning pattern detected",
            Self::HighRequestRate => "DDoS pattern detected",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailedLogin => write!(f, "FailedLogin"),
            Self::PortScan => write!(f, "PortScan"),
            Self::HighRequestRate => write!(f, "HighRequestRate"),
        }
    }
}

/// 이벤트 레코드
///
/// 원시 로그 라인 하나를 구조화한 결과입니다. 라인당 한 번 생성되어
/// 엔진이 정확히 한 번 소비한 뒤 버려집니다. 입력 시퀀스 전체에서
/// 타임스탬프는 비감소(non-decreasing)라고 가정합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// 출발지 식별자 (라인의 마지막 공백 구분 토큰)
    pub address: String,
    /// 이벤트 발생 시각 (로그 타임스탬프, 타임존 없음)
    pub timestamp: NaiveDateTime,
    /// 행위 카테고리
    pub category: EventCategory,
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {}", self.category, self.address, self.timestamp)
    }
}

/// 알림 레코드 — 탐지 엔진의 출력
///
/// 임계값이 넘어서는 순간 생성되며 이후 불변입니다.
/// `Ord` 파생으로 `BTreeSet`에 담아 실행 단위 중복 제거와
/// 결정적 순서를 동시에 얻습니다. 같은 (address, description) 쌍은
/// 한 실행에서 한 번만 남습니다.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlertRecord {
    /// 플래그된 출발지 주소
    pub address: String,
    /// 발화한 패턴의 카테고리
    pub category: EventCategory,
    /// 사람이 읽는 패턴 설명
    pub description: String,
}

impl AlertRecord {
    /// 카테고리의 표준 설명 문자열로 알림을 생성합니다.
    pub fn new(address: impl Into<String>, category: EventCategory) -> Self {
        Self {
            address: address.into(),
            category,
            description: category.alert_description().to_owned(),
        }
    }
}

impl fmt::Display for AlertRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.address, self.description)
    }
}
