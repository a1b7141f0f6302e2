//! KoLmafia 가격 맵 디코더.
//!
//! 응답은 일반 텍스트이며 첫 줄은 헤더입니다:
//!
//! ```text
//! <header>
//! 1	1700000000	95
//! 2	1699990000	120
//! ```
//!
//! 각 줄은 공백(탭 포함)으로 구분된 `아이템ID 갱신시각 가격` 3열입니다.

use super::{as_text, decode_lines, Decoded, ParseMode};
use crate::error::Result;
use koldb_core::ReferencePrice;

/// 참조가 응답을 디코딩합니다. 첫 줄(헤더)은 버립니다.
pub fn decode_reference_prices(body: &[u8], mode: ParseMode) -> Result<Decoded<ReferencePrice>> {
    let text = as_text(body);
    let rows = text
        .lines()
        .enumerate()
        .skip(1)
        .map(|(idx, line)| (idx + 1, line));

    decode_lines(rows, mode, parse_row)
}

fn parse_row(line: &str) -> std::result::Result<ReferencePrice, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(format!("필드 3개 필요, {}개 발견", fields.len()));
    }

    let item_id = fields[0]
        .parse::<i32>()
        .map_err(|e| format!("아이템 ID 해석 실패 {:?}: {}", fields[0], e))?;
    let timestamp = fields[1]
        .parse::<i64>()
        .map_err(|e| format!("갱신 시각 해석 실패 {:?}: {}", fields[1], e))?;
    let price = fields[2]
        .parse::<i64>()
        .map_err(|e| format!("가격 해석 실패 {:?}: {}", fields[2], e))?;

    Ok(ReferencePrice {
        item_id,
        price,
        timestamp,
    })
}
