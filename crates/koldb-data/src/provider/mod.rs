//! 데이터 Provider 모듈.
//!
//! ## ColdFront newmarket
//! - 거래 내역 export (XML)
//! - 최신가 (`itemid,price<br>`, 요청당 최대 10개)
//!
//! ## KoLmafia
//! - 아이템별 참조가 맵 (헤더 + 공백 구분 텍스트)

pub mod market;
pub mod urls;

pub use market::KolMarketClient;
pub use urls::{
    Endpoints, COLDFRONT_EXPORT_URL, COLDFRONT_LATEST_URL, MAFIA_PRICES_URL,
    MAX_LATEST_PRICE_ITEMS,
};
