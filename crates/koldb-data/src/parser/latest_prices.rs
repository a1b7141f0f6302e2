//! ColdFront 최신가 디코더.
//!
//! 응답은 HTML 조각이며 레코드마다 `itemid,price` 뒤에 `<br>`이 붙습니다:
//!
//! ```text
//! 194,1500000<br>
//! 895,2990<br>
//! ```
//!
//! 줄바꿈 없이 `<br>`만으로 이어진 응답도 같은 방식으로 나눕니다.

use super::{as_text, decode_lines, Decoded, ParseMode};
use crate::error::Result;
use koldb_core::LatestPrice;

const RECORD_SEPARATOR: &str = "<br>";

/// 최신가 응답을 디코딩합니다.
pub fn decode_latest_prices(body: &[u8], mode: ParseMode) -> Result<Decoded<LatestPrice>> {
    let text = as_text(body);
    let segments = text.lines().enumerate().flat_map(|(idx, line)| {
        line.split(RECORD_SEPARATOR)
            .map(move |segment| (idx + 1, segment))
    });

    decode_lines(segments, mode, parse_line)
}

fn parse_line(line: &str) -> std::result::Result<LatestPrice, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 2 {
        return Err(format!("필드 2개 필요, {}개 발견", fields.len()));
    }

    let item_id = fields[0]
        .parse::<i32>()
        .map_err(|e| format!("아이템 ID 해석 실패 {:?}: {}", fields[0], e))?;
    let price = fields[1]
        .parse::<i64>()
        .map_err(|e| format!("가격 해석 실패 {:?}: {}", fields[1], e))?;

    Ok(LatestPrice { item_id, price })
}
