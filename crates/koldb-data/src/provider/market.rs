//! KoL 마켓 원천 HTTP 클라이언트.
//!
//! ColdFront(거래 내역, 최신가)와 KoLmafia(참조가) 응답을 받아
//! `parser` 모듈로 디코딩합니다.
//!
//! ## 사용 예시
//! ```rust,ignore
//! let client = KolMarketClient::new(Endpoints::default());
//! let window = TradingWindow::last_day(Utc::now());
//! let txs = client.fetch_transactions(window, Some(194)).await?;
//! ```

use super::urls::{Endpoints, MAX_LATEST_PRICE_ITEMS};
use crate::error::{DataError, Result};
use crate::parser::{
    decode_latest_prices, decode_reference_prices, decode_transactions, Decoded, ParseMode,
};
use koldb_core::{LatestPrice, ReferencePrice, Transaction, TradingWindow};
use reqwest::{Client, Url};
use std::time::Duration;

const USER_AGENT: &str = concat!("koldb-collector/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 마켓 원천 클라이언트.
#[derive(Clone)]
pub struct KolMarketClient {
    client: Client,
    endpoints: Endpoints,
}

impl KolMarketClient {
    /// 새 클라이언트를 생성합니다.
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .user_agent(USER_AGENT)
                .build()
                .expect("HTTP 클라이언트 생성 실패"),
            endpoints,
        }
    }

    /// GET 요청을 보내고 본문 전체를 읽어 반환합니다.
    ///
    /// 2xx가 아니면 본문을 해석하지 않고 `HttpStatus`를 반환합니다.
    /// 응답은 이 함수 안에서 모두 소비되고 해제됩니다.
    pub async fn fetch(&self, url: Url) -> Result<Vec<u8>> {
        tracing::debug!(url = %url, "원천 요청");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(url = %url, bytes = body.len(), "원천 응답 수신");

        Ok(body.to_vec())
    }

    /// 구간 내 거래 내역 조회. `item_id`가 없으면 전체 아이템.
    pub async fn fetch_transactions(
        &self,
        window: TradingWindow,
        item_id: Option<i32>,
    ) -> Result<Vec<Transaction>> {
        let url = self.endpoints.transactions_url(window, item_id);
        let body = self.fetch(url).await?;
        let transactions = decode_transactions(&body)?;

        tracing::info!(
            window = %window,
            item_id = ?item_id,
            count = transactions.len(),
            "거래 내역 조회 완료"
        );
        Ok(transactions)
    }

    /// 최대 10개 아이템의 최신가 조회.
    pub async fn fetch_latest_prices(
        &self,
        item_ids: &[i32],
        mode: ParseMode,
    ) -> Result<Decoded<LatestPrice>> {
        let url = self.endpoints.latest_prices_url(item_ids)?;
        let body = self.fetch(url).await?;
        let decoded = decode_latest_prices(&body, mode)?;
        decoded.log_rejected("coldfront_latest_price");

        tracing::info!(
            requested = item_ids.len(),
            count = decoded.records.len(),
            rejected = decoded.rejected.len(),
            "최신가 조회 완료"
        );
        Ok(decoded)
    }

    /// 아이템 수 제한 없이 최신가 조회.
    ///
    /// 10개씩 나누어 요청하며, 같은 호스트에 대한 연속 요청 사이에 `delay`만큼 쉽니다.
    pub async fn fetch_latest_prices_batched(
        &self,
        item_ids: &[i32],
        mode: ParseMode,
        delay: Duration,
    ) -> Result<Decoded<LatestPrice>> {
        let mut merged = Decoded::default();

        for (idx, chunk) in item_ids.chunks(MAX_LATEST_PRICE_ITEMS).enumerate() {
            if idx > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let decoded = self.fetch_latest_prices(chunk, mode).await?;
            merged.records.extend(decoded.records);
            merged.rejected.extend(decoded.rejected);
        }

        Ok(merged)
    }

    /// KoLmafia 참조가 전체 조회.
    pub async fn fetch_reference_prices(&self, mode: ParseMode) -> Result<Decoded<ReferencePrice>> {
        let url = self.endpoints.reference_prices_url();
        let body = self.fetch(url).await?;
        let decoded = decode_reference_prices(&body, mode)?;
        decoded.log_rejected("kolmafia_price_map");

        tracing::info!(
            count = decoded.records.len(),
            rejected = decoded.rejected.len(),
            "참조가 조회 완료"
        );
        Ok(decoded)
    }
}
