//! 일괄 적재 모듈.
//!
//! 레코드마다 독립된 멱등 쓰기 한 건을 실행하며, 동시에 진행되는 쓰기는
//! `concurrency`개로 제한됩니다. 모든 레코드의 쓰기가 시도된 뒤에만 반환합니다.

use crate::LoadReport;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use koldb_core::{load_span, Item, PriceQuote, TableKind, Transaction, UpsertOutcome};
use koldb_data::MarketStore;
use std::time::Instant;
use tracing::Instrument;

/// 저장소에 적재할 수 있는 레코드.
#[async_trait]
pub trait Loadable: Send + Sync {
    /// 대상 테이블
    const TABLE: TableKind;

    /// 실패 보고용 키
    fn key(&self) -> String;

    async fn load_into(&self, store: &dyn MarketStore) -> koldb_data::Result<UpsertOutcome>;
}

#[async_trait]
impl Loadable for Item {
    const TABLE: TableKind = TableKind::Item;

    fn key(&self) -> String {
        self.id.to_string()
    }

    async fn load_into(&self, store: &dyn MarketStore) -> koldb_data::Result<UpsertOutcome> {
        store.upsert_item(self).await
    }
}

#[async_trait]
impl Loadable for PriceQuote {
    const TABLE: TableKind = TableKind::Price;

    fn key(&self) -> String {
        self.item_id.to_string()
    }

    async fn load_into(&self, store: &dyn MarketStore) -> koldb_data::Result<UpsertOutcome> {
        store.upsert_price(self).await
    }
}

#[async_trait]
impl Loadable for Transaction {
    const TABLE: TableKind = TableKind::Transaction;

    fn key(&self) -> String {
        self.transaction_id.to_string()
    }

    async fn load_into(&self, store: &dyn MarketStore) -> koldb_data::Result<UpsertOutcome> {
        store.insert_transaction(self).await
    }
}

/// 레코드를 동시에 최대 `concurrency`개씩 적재합니다.
///
/// 실패는 경고 로그를 남기고 `LoadReport.failures`에 모으며 적재를 중단하지 않습니다.
pub async fn upsert_many<T: Loadable>(
    store: &dyn MarketStore,
    records: &[T],
    concurrency: usize,
) -> LoadReport {
    let span = load_span!("upsert_many", T::TABLE, records.len());
    load_all(store, records, concurrency).instrument(span).await
}

async fn load_all<T: Loadable>(
    store: &dyn MarketStore,
    records: &[T],
    concurrency: usize,
) -> LoadReport {
    let start = Instant::now();
    let mut report = LoadReport::new(T::TABLE);
    report.attempted = records.len();

    tracing::info!(store = store.name(), concurrency, "일괄 적재 시작");

    let mut results = stream::iter(records)
        .map(move |record| async move { (record, record.load_into(store).await) })
        .buffer_unordered(concurrency.max(1));

    while let Some((record, result)) = results.next().await {
        match result {
            Ok(outcome) => report.record(outcome),
            Err(e) => {
                tracing::warn!(
                    key = %record.key(),
                    error = %e,
                    "레코드 적재 실패"
                );
                report.record_failure(record.key(), e);
            }
        }
    }

    report.elapsed = start.elapsed();
    report
}
