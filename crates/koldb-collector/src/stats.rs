//! 적재 통계 구조체.

use koldb_core::{TableKind, UpsertOutcome};
use serde::Serialize;
use std::time::Duration;

/// 레코드 한 건의 적재 실패.
#[derive(Debug, Clone, Serialize)]
pub struct LoadFailure {
    /// 레코드 키 (아이템 ID, 거래 ID)
    pub key: String,
    pub error: String,
}

/// 테이블 하나에 대한 일괄 적재 결과
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    /// 대상 테이블
    pub table: TableKind,
    /// 시도한 레코드 수
    pub attempted: usize,
    /// 삽입/갱신된 레코드 수
    pub written: usize,
    /// 이미 존재하여 변경 없는 레코드 수
    pub unchanged: usize,
    /// 카탈로그에 없어 건너뛴 레코드 수
    pub skipped: usize,
    /// 실패한 레코드
    pub failures: Vec<LoadFailure>,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl LoadReport {
    /// 빈 통계 객체 생성
    pub fn new(table: TableKind) -> Self {
        Self {
            table,
            attempted: 0,
            written: 0,
            unchanged: 0,
            skipped: 0,
            failures: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Written => self.written += 1,
            UpsertOutcome::Unchanged => self.unchanged += 1,
            UpsertOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn record_failure(&mut self, key: impl Into<String>, error: impl ToString) {
        self.failures.push(LoadFailure {
            key: key.into(),
            error: error.to_string(),
        });
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// 모든 레코드의 쓰기가 시도되었는지 확인
    pub fn is_complete(&self) -> bool {
        self.written + self.unchanged + self.skipped + self.failed() == self.attempted
    }

    /// 성공률 계산 (%). 건너뜀과 변경 없음도 성공으로 본다.
    pub fn success_rate(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            ((self.attempted - self.failed()) as f64 / self.attempted as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            table = %self.table,
            attempted = self.attempted,
            written = self.written,
            unchanged = self.unchanged,
            skipped = self.skipped,
            failed = self.failed(),
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "적재 완료"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = LoadReport::new(TableKind::Transaction);
        report.attempted = 4;
        report.record(UpsertOutcome::Written);
        report.record(UpsertOutcome::Unchanged);
        report.record(UpsertOutcome::Skipped);
        assert!(!report.is_complete());

        report.record_failure("52218870", "connection reset");
        assert!(report.is_complete());
        assert_eq!(report.failed(), 1);
        assert!((report.success_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_report() {
        let report = LoadReport::new(TableKind::Item);
        assert!(report.is_complete());
        assert_eq!(report.success_rate(), 0.0);
    }
}
