//! 핵심 타입의 에러 정의.

use thiserror::Error;

/// 핵심 타입 생성 에러.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// 잘못된 거래 구간 (start > end)
    #[error("잘못된 거래 구간: start={start}, end={end}")]
    InvalidWindow { start: i64, end: i64 },
}

/// 핵심 타입 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;
