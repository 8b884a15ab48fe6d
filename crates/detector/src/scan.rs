//! 배치 스캔 실행기 — 추출기와 엔진을 입력 순서대로 연결
//!
//! [`LogScanner`]는 로그 파일(또는 라인 시퀀스)을 단일 스레드로
//! 순서대로 접어 넣고, 알림 집합과 실행 통계를 담은
//! [`ScanReport`]를 돌려줍니다.
//!
//! 추출 단계에서 거부된 라인(형식 위반)은 경고 로그와 함께 건너뛰고
//! 실행을 계속합니다. 탐지 단계의 순서 위반은 호출자 계약 위반이므로
//! 실행 전체를 거부합니다.

use std::path::Path;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use logwarden_core::config::ExtractorConfig;
use logwarden_core::error::WardenError;
use logwarden_core::pipeline::Extractor;
use logwarden_core::types::AlertRecord;

use crate::engine::DetectionEngine;
use crate::extract::AccessLogExtractor;

/// 스캔 실행 통계
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// 읽은 총 라인 수
    pub lines_read: u64,
    /// 이벤트 레코드로 추출된 라인 수
    pub events_extracted: u64,
    /// 인식되지 않아 조용히 드롭된 라인 수
    pub lines_ignored: u64,
    /// 형식 위반으로 거부된 라인 수
    pub lines_rejected: u64,
    /// 방출된 총 알림 수 (중복 포함)
    pub alerts_emitted: u64,
    /// 중복 제거 후 알림 수
    pub unique_alerts: u64,
    /// 추적된 주소 수
    pub addresses_tracked: u64,
}

/// 스캔 결과 보고서
///
/// `alerts`는 중복 제거된 집합을 정렬 순서대로 담습니다.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// 중복 제거된 알림 (주소, 카테고리 순 정렬)
    pub alerts: Vec<AlertRecord>,
    /// 실행 통계
    pub stats: ScanStats,
}

/// 배치 스캔 실행기
///
/// # 사용 예시
/// ```ignore
/// let mut scanner = LogScanner::new(&config.extractor);
/// scanner.scan_file("access.log").await?;
/// let report = scanner.finish();
/// ```
pub struct LogScanner {
    extractor: AccessLogExtractor,
    engine: DetectionEngine,
    stats: ScanStats,
}

impl LogScanner {
    /// 설정에서 새 스캐너를 생성합니다.
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            extractor: AccessLogExtractor::from_config(config),
            engine: DetectionEngine::new(),
            stats: ScanStats::default(),
        }
    }

    /// 라인 하나를 처리합니다.
    ///
    /// 추출 거부는 통계에 기록하고 `Ok`로 계속합니다.
    /// 탐지 에러(순서 위반)만 `Err`로 전파됩니다.
    pub fn process_line(&mut self, line: &str) -> Result<(), WardenError> {
        self.stats.lines_read += 1;

        let record = match self.extractor.extract(line) {
            Ok(Some(record)) => record,
            Ok(None) => {
                self.stats.lines_ignored += 1;
                return Ok(());
            }
            Err(WardenError::Extract(e)) => {
                self.stats.lines_rejected += 1;
                warn!(
                    line_no = self.stats.lines_read,
                    error = %e,
                    "line rejected by extractor"
                );
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        self.stats.events_extracted += 1;
        debug!(event = %record, "event extracted");

        self.engine.observe(&record)?;
        Ok(())
    }

    /// 로그 파일 전체를 순서대로 스캔합니다.
    pub async fn scan_file(&mut self, path: impl AsRef<Path>) -> Result<(), WardenError> {
        let path = path.as_ref();
        info!(path = %path.display(), "scanning access log");

        let file = tokio::fs::File::open(path).await?;
        let mut lines = BufReader::new(file).lines();
        while let Some(line) = lines.next_line().await? {
            self.process_line(&line)?;
        }
        Ok(())
    }

    /// 라인 시퀀스를 순서대로 스캔합니다 (동기, 테스트용).
    pub fn scan_lines<I, S>(&mut self, lines: I) -> Result<(), WardenError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.process_line(line.as_ref())?;
        }
        Ok(())
    }

    /// 스캐너를 소비하고 보고서를 생성합니다.
    pub fn finish(mut self) -> ScanReport {
        self.stats.alerts_emitted = self.engine.alerts_emitted();
        self.stats.addresses_tracked = self.engine.tracked_addresses() as u64;

        let alerts: Vec<AlertRecord> = self.engine.into_alerts().into_iter().collect();
        self.stats.unique_alerts = alerts.len() as u64;

        info!(
            lines = self.stats.lines_read,
            events = self.stats.events_extracted,
            alerts = self.stats.unique_alerts,
            "scan complete"
        );

        ScanReport {
            alerts,
            stats: self.stats,
        }
    }
}
