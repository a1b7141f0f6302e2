//! 아이템 시세 레코드.
//!
//! 두 가지 원천이 있습니다:
//! - `LatestPrice` - ColdFront 마켓의 최신 체결가 (시각 없음)
//! - `ReferencePrice` - KoLmafia 가격 맵의 참조가 (갱신 시각 포함)
//!
//! 둘 다 저장 시 `PriceQuote` 한 행으로 정규화됩니다.

use serde::{Deserialize, Serialize};

/// 최신 마켓 시세.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestPrice {
    /// 아이템 ID
    #[serde(rename = "itemID", alias = "itemid")]
    pub item_id: i32,
    /// 최신 가격
    #[serde(alias = "Price")]
    pub price: i64,
}

impl LatestPrice {
    /// 관측 시각을 붙여 저장용 시세로 변환합니다.
    pub fn observed_at(&self, epoch_time: i64) -> PriceQuote {
        PriceQuote {
            item_id: self.item_id,
            price: self.price,
            epoch_time,
        }
    }
}

/// 참조 시세 (외부 집계 서비스의 시각별 스냅샷).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePrice {
    /// 아이템 ID
    #[serde(rename = "itemID", alias = "itemid")]
    pub item_id: i32,
    /// 가격
    pub price: i64,
    /// 마지막 갱신 시각 (epoch 초)
    #[serde(alias = "time")]
    pub timestamp: i64,
}

/// `prices` 테이블 한 행.
///
/// 식별자는 `item_id`이며 마지막 쓰기가 이깁니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub item_id: i32,
    pub price: i64,
    pub epoch_time: i64,
}

impl From<ReferencePrice> for PriceQuote {
    fn from(p: ReferencePrice) -> Self {
        Self {
            item_id: p.item_id,
            price: p.price,
            epoch_time: p.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_price_observed_at() {
        let quote = LatestPrice {
            item_id: 123,
            price: 4560,
        }
        .observed_at(1_700_000_000);
        assert_eq!(quote.item_id, 123);
        assert_eq!(quote.price, 4560);
        assert_eq!(quote.epoch_time, 1_700_000_000);
    }

    #[test]
    fn test_reference_price_into_quote() {
        let quote: PriceQuote = ReferencePrice {
            item_id: 42,
            price: 99,
            timestamp: 1_700_000_000,
        }
        .into();
        assert_eq!(
            quote,
            PriceQuote {
                item_id: 42,
                price: 99,
                epoch_time: 1_700_000_000
            }
        );
    }

    #[test]
    fn test_legacy_latest_price_snapshot() {
        let p: LatestPrice = serde_json::from_str(r#"{"itemid":194,"Price":1500000}"#).unwrap();
        assert_eq!(p.item_id, 194);
        assert_eq!(p.price, 1_500_000);
    }
}
