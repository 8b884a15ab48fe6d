//! Logwarden 공통 크레이트 — 도메인 타입, 에러, 설정, 확장 trait
//!
//! 접근 로그 기반 침입 패턴 탐지기의 모든 크레이트가 공유하는
//! 기반 레이어입니다. 탐지 로직 자체는 `logwarden-detector`에 있으며,
//! 이 크레이트는 데이터 모델과 경계(trait)만 정의합니다.
//!
//! # 모듈 구성
//!
//! - [`types`]: 이벤트 레코드, 이벤트 카테고리, 알림 레코드
//! - [`error`]: `thiserror` 기반 도메인 에러 타입
//! - [`config`]: `logwarden.toml` 파싱 및 환경변수 오버라이드
//! - [`pipeline`]: 추출기(Extractor) 확장 trait

pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// --- 주요 타입 re-export ---
// 각 모듈의 핵심 타입을 크레이트 루트에서 바로 사용할 수 있도록 합니다.

// 에러
pub use error::{ConfigError, DetectError, ExtractError, WardenError};

// 설정
pub use config::WardenConfig;

// 경계 trait
pub use pipeline::Extractor;

// 도메인 타입
pub use types::{AlertRecord, EventCategory, EventRecord};
