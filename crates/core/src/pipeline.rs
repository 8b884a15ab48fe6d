//! 파이프라인 trait — 확장 포인트 정의

use crate::error::WardenError;
use crate::types::EventRecord;

/// 원시 로그 라인을 이벤트 레코드로 변환하는 trait
///
/// 새로운 로그 레이아웃을 지원하려면 이 trait을 구현합니다.
/// 탐지 엔진은 추출기가 어떻게 레코드를 만들었는지 알지 못합니다.
pub trait Extractor: Send + Sync {
    /// 추출기 이름 (로깅에 사용)
    fn name(&self) -> &str;

    /// 라인 하나를 이벤트 레코드로 변환합니다.
    ///
    /// - `Ok(Some(record))` — 인식된 이벤트
    /// - `Ok(None)` — 인식되지 않는 라인 (조용히 드롭, 에러 아님)
    /// - `Err(_)` — 형식 위반 라인 (거부, 엔진에 도달하지 않음)
    fn extract(&self, line: &str) -> Result<Option<EventRecord>, WardenError>;
}
