//! 메모리 기반 저장소.
//!
//! PostgreSQL 구현과 같은 upsert 규칙을 따릅니다:
//! - 아이템: 이름 덮어쓰기
//! - 시세: 카탈로그에 있는 아이템만, 마지막 쓰기 우선
//! - 거래: 먼저 기록된 값 유지
//!
//! `--dry-run` 실행과 테스트에서 사용합니다.

use super::MarketStore;
use crate::error::{DataError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use koldb_core::{Item, PriceQuote, TableKind, Transaction, UpdateMarker, UpsertOutcome};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    items: HashMap<i32, String>,
    prices: HashMap<i32, PriceQuote>,
    transactions: HashMap<i64, Transaction>,
    markers: HashMap<&'static str, DateTime<Utc>>,
}

/// 메모리 기반 `MarketStore`.
#[derive(Debug)]
pub struct InMemoryMarketStore {
    tables: RwLock<Tables>,
    enforce_foreign_keys: bool,
}

impl Default for InMemoryMarketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMarketStore {
    /// `transactions.item_id -> item` 외래 키를 검사하는 저장소.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            enforce_foreign_keys: true,
        }
    }

    /// 거래의 외래 키를 검사하지 않는 저장소 (카탈로그 없이 dry-run 할 때).
    pub fn without_foreign_keys() -> Self {
        Self {
            enforce_foreign_keys: false,
            ..Self::new()
        }
    }

    /// 아이템 이름 조회.
    pub async fn item_name(&self, id: i32) -> Option<String> {
        self.tables.read().await.items.get(&id).cloned()
    }

    /// 시세 조회.
    pub async fn price(&self, item_id: i32) -> Option<PriceQuote> {
        self.tables.read().await.prices.get(&item_id).copied()
    }

    /// 거래 조회.
    pub async fn transaction(&self, transaction_id: i64) -> Option<Transaction> {
        self.tables
            .read()
            .await
            .transactions
            .get(&transaction_id)
            .cloned()
    }
}

#[async_trait]
impl MarketStore for InMemoryMarketStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn upsert_item(&self, item: &Item) -> Result<UpsertOutcome> {
        self.tables
            .write()
            .await
            .items
            .insert(item.id, item.name.clone());
        Ok(UpsertOutcome::Written)
    }

    async fn upsert_price(&self, quote: &PriceQuote) -> Result<UpsertOutcome> {
        let mut tables = self.tables.write().await;
        if !tables.items.contains_key(&quote.item_id) {
            return Ok(UpsertOutcome::Skipped);
        }
        tables.prices.insert(quote.item_id, *quote);
        Ok(UpsertOutcome::Written)
    }

    async fn insert_transaction(&self, transaction: &Transaction) -> Result<UpsertOutcome> {
        let mut tables = self.tables.write().await;

        if self.enforce_foreign_keys && !tables.items.contains_key(&transaction.item_id) {
            return Err(DataError::Storage(format!(
                "foreign key violation: item {} not in catalog (transaction {})",
                transaction.item_id, transaction.transaction_id
            )));
        }

        if tables.transactions.contains_key(&transaction.transaction_id) {
            return Ok(UpsertOutcome::Unchanged);
        }
        tables
            .transactions
            .insert(transaction.transaction_id, transaction.clone());
        Ok(UpsertOutcome::Written)
    }

    async fn touch_marker(&self, marker: UpdateMarker, at: DateTime<Utc>) -> Result<()> {
        self.tables
            .write()
            .await
            .markers
            .insert(marker.table_name(), at);
        Ok(())
    }

    async fn last_modified(&self, marker: UpdateMarker) -> Result<Option<DateTime<Utc>>> {
        Ok(self
            .tables
            .read()
            .await
            .markers
            .get(marker.table_name())
            .copied())
    }

    async fn count(&self, table: TableKind) -> Result<i64> {
        let tables = self.tables.read().await;
        let count = match table {
            TableKind::Item => tables.items.len(),
            TableKind::Price => tables.prices.len(),
            TableKind::Transaction => tables.transactions.len(),
        };
        Ok(count as i64)
    }
}
