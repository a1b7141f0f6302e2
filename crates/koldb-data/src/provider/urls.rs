//! 원천 API 요청 URL 생성.
//!
//! 모든 함수는 순수 함수이며 네트워크에 접근하지 않습니다.
//!
//! | 엔드포인트 | 파라미터 |
//! |---|---|
//! | ColdFront 거래 내역 (`export.php`) | `start`, `end`, `itemid` (빈 값 = 전체) |
//! | ColdFront 최신가 (`latestprice.php`) | `item1` .. `item10` |
//! | KoLmafia 가격 맵 (`updateprices.php`) | `action=getmap` 고정 |

use crate::error::{DataError, Result};
use koldb_core::TradingWindow;
use reqwest::Url;

/// ColdFront 거래 내역 export 기본 URL
pub const COLDFRONT_EXPORT_URL: &str = "http://kol.coldfront.net/newmarket/export.php";
/// ColdFront 최신가 기본 URL
pub const COLDFRONT_LATEST_URL: &str = "https://kol.coldfront.net/newmarket/latestprice.php";
/// KoLmafia 가격 맵 URL
pub const MAFIA_PRICES_URL: &str = "https://kolmafia.us/scripts/updateprices.php?action=getmap";

/// 최신가 엔드포인트가 한 번에 받는 최대 아이템 수
pub const MAX_LATEST_PRICE_ITEMS: usize = 10;

/// 원천 엔드포인트 묶음.
///
/// 기본값은 공개 서비스를 가리키며, 설정이나 테스트에서 교체할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    transactions: Url,
    latest_prices: Url,
    reference_prices: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(COLDFRONT_EXPORT_URL, COLDFRONT_LATEST_URL, MAFIA_PRICES_URL)
            .expect("기본 엔드포인트 URL 파싱 실패")
    }
}

impl Endpoints {
    /// 세 엔드포인트 URL로 생성합니다.
    pub fn new(transactions: &str, latest_prices: &str, reference_prices: &str) -> Result<Self> {
        Ok(Self {
            transactions: parse_url(transactions)?,
            latest_prices: parse_url(latest_prices)?,
            reference_prices: parse_url(reference_prices)?,
        })
    }

    /// 모든 엔드포인트를 같은 호스트(예: mock 서버) 아래 기본 경로로 둡니다.
    pub fn with_base(base: &str) -> Result<Self> {
        let base = base.trim_end_matches('/');
        Self::new(
            &format!("{}/newmarket/export.php", base),
            &format!("{}/newmarket/latestprice.php", base),
            &format!("{}/scripts/updateprices.php?action=getmap", base),
        )
    }

    /// 거래 내역 조회 URL.
    ///
    /// `item_id`가 없으면 `itemid=`를 빈 값으로 보내 전체 아이템을 조회합니다.
    pub fn transactions_url(&self, window: TradingWindow, item_id: Option<i32>) -> Url {
        let mut url = self.transactions.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("start", &window.start().to_string())
            .append_pair("end", &window.end().to_string())
            .append_pair(
                "itemid",
                &item_id.map(|id| id.to_string()).unwrap_or_default(),
            );
        url
    }

    /// 최신가 조회 URL. 아이템이 10개를 넘으면 `TooManyItems`.
    pub fn latest_prices_url(&self, item_ids: &[i32]) -> Result<Url> {
        if item_ids.len() > MAX_LATEST_PRICE_ITEMS {
            return Err(DataError::TooManyItems {
                count: item_ids.len(),
                max: MAX_LATEST_PRICE_ITEMS,
            });
        }

        let mut url = self.latest_prices.clone();
        url.set_query(None);
        if !item_ids.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (idx, id) in item_ids.iter().enumerate() {
                pairs.append_pair(&format!("item{}", idx + 1), &id.to_string());
            }
        }
        Ok(url)
    }

    /// 참조가(KoLmafia 가격 맵) URL.
    pub fn reference_prices_url(&self) -> Url {
        self.reference_prices.clone()
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| DataError::InvalidInput(format!("잘못된 URL {}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn test_transactions_url_single_item() {
        let window = TradingWindow::new(1_674_968_400, 1_674_969_465).unwrap();
        let url = Endpoints::default().transactions_url(window, Some(194));
        assert_eq!(
            url.as_str(),
            "http://kol.coldfront.net/newmarket/export.php?start=1674968400&end=1674969465&itemid=194"
        );
    }

    #[test]
    fn test_transactions_url_all_items() {
        let window = TradingWindow::new(0, 3600).unwrap();
        let url = Endpoints::default().transactions_url(window, None);
        assert!(url.as_str().ends_with("itemid="));
        assert_eq!(query_map(&url)["itemid"], "");
    }

    #[test]
    fn test_latest_prices_url_order() {
        let url = Endpoints::default()
            .latest_prices_url(&[194, 895, 896])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://kol.coldfront.net/newmarket/latestprice.php?item1=194&item2=895&item3=896"
        );
    }

    #[test]
    fn test_latest_prices_url_too_many() {
        let ids: Vec<i32> = (1..=11).collect();
        let err = Endpoints::default().latest_prices_url(&ids).unwrap_err();
        assert!(matches!(err, DataError::TooManyItems { count: 11, max: 10 }));
    }

    #[test]
    fn test_reference_prices_url_is_constant() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.reference_prices_url().as_str(), MAFIA_PRICES_URL);
    }

    #[test]
    fn test_with_base() {
        let endpoints = Endpoints::with_base("http://127.0.0.1:1234/").unwrap();
        let window = TradingWindow::new(1, 2).unwrap();
        assert_eq!(
            endpoints.transactions_url(window, None).path(),
            "/newmarket/export.php"
        );
        assert_eq!(
            endpoints.reference_prices_url().query(),
            Some("action=getmap")
        );
    }

    proptest! {
        #[test]
        fn prop_transactions_url_round_trip(
            start in 0i64..4_000_000_000,
            span in 0i64..1_000_000,
            item_id in proptest::option::of(1i32..100_000),
        ) {
            let window = TradingWindow::new(start, start + span).unwrap();
            let url = Endpoints::default().transactions_url(window, item_id);
            let query = query_map(&url);

            prop_assert_eq!(query["start"].parse::<i64>().unwrap(), window.start());
            prop_assert_eq!(query["end"].parse::<i64>().unwrap(), window.end());
            let decoded = match query["itemid"].as_str() {
                "" => None,
                s => Some(s.parse::<i32>().unwrap()),
            };
            prop_assert_eq!(decoded, item_id);
        }

        #[test]
        fn prop_latest_prices_url_limit(ids in proptest::collection::vec(1i32..100_000, 0..20)) {
            let result = Endpoints::default().latest_prices_url(&ids);
            if ids.len() > MAX_LATEST_PRICE_ITEMS {
                let is_too_many = matches!(result, Err(DataError::TooManyItems { .. }));
                prop_assert!(is_too_many);
            } else {
                let url = result.unwrap();
                let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
                prop_assert_eq!(pairs.len(), ids.len());
                for (idx, (key, value)) in pairs.iter().enumerate() {
                    prop_assert_eq!(key, &format!("item{}", idx + 1));
                    prop_assert_eq!(value, &ids[idx].to_string());
                }
            }
        }
    }
}
