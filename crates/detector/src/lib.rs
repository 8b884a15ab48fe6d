//! Logwarden 탐지 크레이트 — 라인 추출, 패턴 탐지 엔진, 스캔 실행기
//!
//! # 모듈 구성
//!
//! - [`rule`]: 카테고리별 윈도우 길이와 발화 임계값 (고정 규칙 테이블)
//! - [`engine`]: 주소별 추적 상태와 윈도우/임계값 판정 (THE CORE)
//! - [`extract`]: 고정 레이아웃 접근 로그 라인 → [`EventRecord`] 추출
//! - [`scan`]: 파일/라인 시퀀스 전체를 순서대로 접어 넣는 배치 실행기
//!
//! # 아키텍처
//!
//! ```text
//! raw lines -> AccessLogExtractor -> EventRecord -> DetectionEngine -> AlertRecord set
//!                   |                                    |
//!            substring category               per-address TrackState
//! ```
//!
//! 처리 모델은 단일 스레드, 동기, 입력 순서 유지입니다. 이벤트는
//! 한 번에 하나씩 소비되며 타임스탬프 비감소를 가정합니다.
//!
//! [`EventRecord`]: logwarden_core::types::EventRecord

pub mod engine;
pub mod extract;
pub mod rule;
pub mod scan;

// --- 주요 타입 re-export ---

pub use engine::{DetectionEngine, TrackState, step};
pub use extract::AccessLogExtractor;
pub use rule::Rule;
pub use scan::{LogScanner, ScanReport, ScanStats};
