//! ColdFront 거래 내역 XML 디코더.
//!
//! ```xml
//! <marketplace>
//!   <trans id="52218870">
//!     <itemid>194</itemid>
//!     <vol>1</vol>
//!     <cost>1398000.00</cost>
//!     <when>1674968512</when>
//!   </trans>
//! </marketplace>
//! ```

use super::as_text;
use crate::error::{DataError, Result};
use koldb_core::Transaction;
use quick_xml::events::Event;
use quick_xml::Reader;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

const ROOT_ELEMENT: &str = "marketplace";

#[derive(Debug, Deserialize)]
struct Marketplace {
    #[serde(rename = "trans", default)]
    details: Vec<TransElement>,
}

#[derive(Debug, Deserialize)]
struct TransElement {
    #[serde(rename = "@id")]
    id: i64,
    itemid: i32,
    vol: i32,
    // 소수점 정밀도 유지를 위해 문자열로 받은 뒤 Decimal로 변환
    cost: String,
    when: i64,
}

impl TryFrom<TransElement> for Transaction {
    type Error = DataError;

    fn try_from(el: TransElement) -> Result<Self> {
        let price = Decimal::from_str(el.cost.trim()).map_err(|e| {
            DataError::MalformedXml(format!("거래 {}의 cost {:?} 해석 실패: {}", el.id, el.cost, e))
        })?;

        Ok(Transaction {
            transaction_id: el.id,
            item_id: el.itemid,
            volume: el.vol,
            price,
            timestamp: el.when,
        })
    }
}

/// 거래 내역 XML을 문서 순서대로 디코딩합니다.
///
/// 빈 본문이나 빈 `<marketplace/>`는 빈 목록입니다.
/// 루트 요소가 `marketplace`가 아니거나 필드가 맞지 않으면 `MalformedXml`.
pub fn decode_transactions(body: &[u8]) -> Result<Vec<Transaction>> {
    let text = as_text(body);

    match root_element(&text)? {
        None => return Ok(Vec::new()),
        Some(name) if name != ROOT_ELEMENT => {
            return Err(DataError::MalformedXml(format!(
                "루트 요소 <{}> 예상, <{}> 발견",
                ROOT_ELEMENT, name
            )));
        }
        Some(_) => {}
    }

    let market: Marketplace = quick_xml::de::from_str(&text)?;

    market
        .details
        .into_iter()
        .map(Transaction::try_from)
        .collect()
}

/// 첫 번째 요소의 이름을 반환합니다. 요소가 없으면 `None`.
fn root_element(text: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(text);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                return Ok(Some(name));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}
