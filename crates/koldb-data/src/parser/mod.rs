//! 원천 응답 디코더.
//!
//! 세 가지 형식을 처리합니다:
//! - `transactions`: ColdFront 거래 내역 XML
//! - `latest_prices`: ColdFront 최신가 (`itemid,price<br>`)
//! - `reference_prices`: KoLmafia 가격 맵 (헤더 + 공백 구분 3열)
//!
//! 텍스트 디코더는 `ParseMode`에 따라 잘못된 줄을 경고로 모으거나(`Lenient`)
//! 첫 오류에서 중단합니다(`Strict`). 어느 경우에도 0이나 쓰레기 값을
//! 레코드로 내보내지 않습니다.

pub mod latest_prices;
pub mod reference_prices;
pub mod transactions;

pub use latest_prices::decode_latest_prices;
pub use reference_prices::decode_reference_prices;
pub use transactions::decode_transactions;

use crate::error::{DataError, Result};
use std::fmt;
use std::str::FromStr;

/// 텍스트 디코더의 오류 처리 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// 잘못된 줄을 `rejected`에 모으고 계속 진행
    #[default]
    Lenient,
    /// 첫 번째 잘못된 줄에서 `MalformedLine` 반환
    Strict,
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(format!("Unknown parse mode: {}", s)),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// 해석하지 못하고 건너뛴 줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1부터 시작하는 줄 번호
    pub line_number: usize,
    pub content: String,
    pub reason: String,
}

impl From<RejectedLine> for DataError {
    fn from(line: RejectedLine) -> Self {
        DataError::MalformedLine {
            line_number: line.line_number,
            content: line.content,
            reason: line.reason,
        }
    }
}

/// 텍스트 디코딩 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    /// 문서 순서대로 해석된 레코드
    pub records: Vec<T>,
    /// 건너뛴 줄 (Lenient 모드에서만 채워짐)
    pub rejected: Vec<RejectedLine>,
}

impl<T> Default for Decoded<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Decoded<T> {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// 건너뛴 줄을 경고 로그로 남깁니다.
    pub fn log_rejected(&self, source: &str) {
        for line in &self.rejected {
            tracing::warn!(
                source = source,
                line_number = line.line_number,
                content = %line.content,
                reason = %line.reason,
                "잘못된 줄 건너뜀"
            );
        }
    }
}

/// 줄 단위 디코딩 공통 루프.
///
/// `decode_line`이 `Err(reason)`을 반환하면 모드에 따라 수집하거나 중단합니다.
pub(crate) fn decode_lines<'a, T, I, F>(lines: I, mode: ParseMode, mut decode_line: F) -> Result<Decoded<T>>
where
    I: Iterator<Item = (usize, &'a str)>,
    F: FnMut(&str) -> std::result::Result<T, String>,
{
    let mut decoded = Decoded::default();

    for (line_number, raw) in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match decode_line(line) {
            Ok(record) => decoded.records.push(record),
            Err(reason) => {
                let rejected = RejectedLine {
                    line_number,
                    content: line.to_string(),
                    reason,
                };
                match mode {
                    ParseMode::Strict => return Err(rejected.into()),
                    ParseMode::Lenient => decoded.rejected.push(rejected),
                }
            }
        }
    }

    Ok(decoded)
}

/// 바이트를 UTF-8 문자열로 해석합니다 (잘못된 바이트는 대체 문자로).
pub(crate) fn as_text(body: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(body)
}
