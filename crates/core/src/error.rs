//! 에러 타입 — 도메인별 에러 정의

use chrono::NaiveDateTime;

/// Logwarden 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum WardenError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 라인 추출 에러
    #[error("extract error: {0}")]
    Extract(#[from] ExtractError),

    /// 탐지 엔진 에러
    #[error("detect error: {0}")]
    Detect(#[from] DetectError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 라인 추출 에러
///
/// 추출기가 라인을 거부할 때 사용합니다. 거부된 라인은 엔진에
/// 도달하지 않으며, 실행 자체는 계속됩니다.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// 타임스탬프 파싱 실패
    #[error("malformed timestamp '{token}': {reason}")]
    MalformedTimestamp { token: String, reason: String },

    /// 라인 길이 초과
    #[error("line too long: {length} bytes (max: {max})")]
    LineTooLong { length: usize, max: usize },
}

/// 탐지 엔진 에러
///
/// 엔진은 호출자 계약(타임스탬프 비감소) 위반 외에는 실패하지
/// 않습니다. 순서 위반은 실행 전체를 거부합니다(fail-fast).
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// 이벤트 타임스탬프가 해당 주소의 윈도우 시작보다 이전
    #[error("out of order event for '{address}': {event_time} precedes window start {window_start}")]
    OutOfOrder {
        address: String,
        event_time: NaiveDateTime,
        window_start: NaiveDateTime,
    },
}
