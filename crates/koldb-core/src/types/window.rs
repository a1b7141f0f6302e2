//! 거래 조회 구간 정의.
//!
//! 모든 시각은 UTC epoch 초 단위입니다. 윤초는 고려하지 않습니다.

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 하루 (초)
pub const EPOCH_DAY: i64 = 86_400;
/// 한 시간 (초)
pub const EPOCH_HOUR: i64 = 3_600;

/// 양 끝을 포함하는 거래 조회 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingWindow {
    start: i64,
    end: i64,
}

impl TradingWindow {
    /// 새 구간을 생성합니다. `start > end`이면 에러를 반환합니다.
    pub fn new(start: i64, end: i64) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// `now` 기준 직전 24시간 구간.
    pub fn last_day(now: DateTime<Utc>) -> Self {
        Self::last_hours(now, 24)
    }

    /// `now` 기준 직전 `hours`시간 구간.
    pub fn last_hours(now: DateTime<Utc>, hours: u32) -> Self {
        let end = now.timestamp();
        Self {
            start: end - i64::from(hours) * EPOCH_HOUR,
            end,
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }
}

impl fmt::Display for TradingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
