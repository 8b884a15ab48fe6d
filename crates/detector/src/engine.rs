//! 패턴 탐지 엔진 — 주소별 추적 상태와 윈도우/임계값 판정
//!
//! [`DetectionEngine`]은 정렬된 이벤트 스트림을 하나씩 소비하며
//! 주소별 [`TrackState`]를 갱신하고, 임계값이 넘어서는 순간
//! [`AlertRecord`]를 방출합니다. 상태 전이 자체는 순수 함수
//! [`step`]으로 분리되어 있어 로그 파일 없이 직접 단위 테스트할 수
//! 있습니다.
//!
//! # 윈도우 의미론
//!
//! - 경과 시간은 초 단위 정수 내림 나눗셈으로 판정합니다:
//!   `elapsed_secs / window_secs >= 1`이면 윈도우 만료. 따라서
//!   경계값(정확히 윈도우 길이만큼 경과)은 만료로 취급됩니다.
//! - 알림 발화 후 `count`는 0으로 돌아가지만 `window_start`는
//!   그대로 유지됩니다. 같은 윈도우가 벽시계상 만료될 때까지 두 번째
//!   알림을 향해 계속 누적됩니다.
//! - 같은 주소에 다른 카테고리가 도착하면 기존 진행 상황을 버리고
//!   새 카테고리로 추적을 시작합니다. 주소당 슬롯은 하나뿐입니다.
//!
//! # 순서 계약
//!
//! 입력 타임스탬프는 비감소여야 합니다. 위반(음수 경과 시간)은
//! [`DetectError::OutOfOrder`]로 즉시 실패합니다.

use std::collections::{BTreeSet, HashMap};

use logwarden_core::error::DetectError;
use logwarden_core::types::{AlertRecord, EventRecord};

use crate::rule::Rule;

/// 주소 하나의 추적 상태
///
/// 명시적 태그드 변형입니다. `Untracked`는 엔진이 해당 주소를 아직
/// 보지 못했거나 테이블에 슬롯이 없는 상태와 동일합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    /// 추적 중이 아님
    Untracked,
    /// 한 카테고리를 추적 중
    Tracking {
        /// 현재 추적 중인 카테고리
        pattern: logwarden_core::types::EventCategory,
        /// 현재 윈도우에서 처음 집계된 이벤트의 타임스탬프
        window_start: chrono::NaiveDateTime,
        /// `window_start` 이후 집계된 이벤트 수
        count: u64,
    },
}

/// 순수 상태 전이 함수: `(state, event) -> (new_state, alert?)`
///
/// 엔진의 단일 연산 `observe`의 본체입니다. 전역 상태를 건드리지
/// 않으므로 임의의 상태/이벤트 조합을 직접 검사할 수 있습니다.
pub fn step(
    state: TrackState,
    event: &EventRecord,
) -> Result<(TrackState, Option<AlertRecord>), DetectError> {
    let (window_start, count) = match state {
        TrackState::Tracking {
            pattern,
            window_start,
            count,
        } if pattern == event.category => (window_start, count),
        // 미추적이거나 다른 카테고리: 이전 진행 상황을 버리고 새로 시작
        _ => {
            return Ok((
                TrackState::Tracking {
                    pattern: event.category,
                    window_start: event.timestamp,
                    count: 1,
                },
                None,
            ));
        }
    };

    let elapsed = (event.timestamp - window_start).num_seconds();
    if elapsed < 0 {
        return Err(DetectError::OutOfOrder {
            address: event.address.clone(),
            event_time: event.timestamp,
            window_start,
        });
    }

    let rule = Rule::for_category(event.category);

    // 정수 내림 나눗셈: 윈도우 길이 이상 경과했을 때만 만료
    if elapsed / rule.window_secs >= 1 {
        // 만료: 이 이벤트가 새 윈도우를 시작
        return Ok((
            TrackState::Tracking {
                pattern: event.category,
                window_start: event.timestamp,
                count: 1,
            },
            None,
        ));
    }

    let count = count + 1;
    if count >= rule.threshold {
        // 발화: 카운트만 리셋, window_start는 그대로 유지
        Ok((
            TrackState::Tracking {
                pattern: event.category,
                window_start,
                count: 0,
            },
            Some(AlertRecord::new(event.address.clone(), event.category)),
        ))
    } else {
        Ok((
            TrackState::Tracking {
                pattern: event.category,
                window_start,
                count,
            },
            None,
        ))
    }
}

/// 패턴 탐지 엔진
///
/// 추적 테이블은 엔진 인스턴스가 소유합니다. 전역 싱글턴이 아니므로
/// 독립적인 탐지 실행(샤드별, 테스트별)이 서로 오염되지 않습니다.
///
/// # 사용 예시
/// ```ignore
/// let mut engine = DetectionEngine::new();
/// for event in events {
///     if let Some(alert) = engine.observe(&event)? {
///         tracing::info!(%alert, "pattern detected");
///     }
/// }
/// let alerts = engine.into_alerts();
/// ```
pub struct DetectionEngine {
    /// 주소별 추적 상태
    trackers: HashMap<String, TrackState>,
    /// 실행 단위 알림 집합 (값 기준 중복 제거, 결정적 순서)
    alerts: BTreeSet<AlertRecord>,
    /// 관측한 총 이벤트 수
    events_observed: u64,
    /// 방출된 총 알림 수 (중복 포함)
    alerts_emitted: u64,
}

impl DetectionEngine {
    /// 새 엔진을 생성합니다.
    pub fn new() -> Self {
        Self {
            trackers: HashMap::new(),
            alerts: BTreeSet::new(),
            events_observed: 0,
            alerts_emitted: 0,
        }
    }

    /// 이벤트 하나를 관측하고, 임계값이 넘어서면 알림을 반환합니다.
    ///
    /// 반환되는 알림은 방출 시점마다 돌려주며, 실행 단위 중복 제거는
    /// [`alerts`](Self::alerts) 집합에서 이루어집니다.
    pub fn observe(&mut self, event: &EventRecord) -> Result<Option<AlertRecord>, DetectError> {
        let state = self
            .trackers
            .get(&event.address)
            .copied()
            .unwrap_or(TrackState::Untracked);

        let (next, alert) = step(state, event)?;
        self.trackers.insert(event.address.clone(), next);
        self.events_observed += 1;

        if let Some(ref alert) = alert {
            self.alerts_emitted += 1;
            tracing::debug!(
                address = %alert.address,
                pattern = %alert.category,
                "threshold crossed"
            );
            self.alerts.insert(alert.clone());
        }

        Ok(alert)
    }

    /// 지금까지 수집된 알림 집합을 반환합니다.
    pub fn alerts(&self) -> &BTreeSet<AlertRecord> {
        &self.alerts
    }

    /// 엔진을 소비하고 알림 집합을 돌려줍니다.
    pub fn into_alerts(self) -> BTreeSet<AlertRecord> {
        self.alerts
    }

    /// 특정 주소의 현재 추적 상태를 반환합니다.
    pub fn tracker(&self, address: &str) -> TrackState {
        self.trackers
            .get(address)
            .copied()
            .unwrap_or(TrackState::Untracked)
    }

    /// 추적 중인 주소 수
    pub fn tracked_addresses(&self) -> usize {
        self.trackers.len()
    }

    /// 관측한 총 이벤트 수
    pub fn events_observed(&self) -> u64 {
        self.events_observed
    }

    /// 방출된 총 알림 수 (중복 제거 전)
    pub fn alerts_emitted(&self) -> u64 {
        self.alerts_emitted
    }
}

impl Default for DetectionEngine {
    fn default() -> Self {
        Self::new()
    }
}
