//! 저장소 계층.
//!
//! 수집기는 `MarketStore` trait만 알고 있으며, 실제 구현은 주입받습니다:
//! - `PgMarketStore`: PostgreSQL (운영)
//! - `InMemoryMarketStore`: 메모리 (dry-run, 테스트)
//!
//! 모든 쓰기는 독립된 단일 문장이며 레코드 간 원자성은 없습니다.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryMarketStore;
pub use postgres::{Database, DatabaseConfig, PgMarketStore};

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use koldb_core::{Item, PriceQuote, TableKind, Transaction, UpdateMarker, UpsertOutcome};

/// 마켓 데이터 저장소.
#[async_trait]
pub trait MarketStore: Send + Sync {
    /// 저장소 이름 (로그용).
    fn name(&self) -> &str;

    /// 아이템 upsert. 이름은 덮어쓰고 ID는 불변.
    async fn upsert_item(&self, item: &Item) -> Result<UpsertOutcome>;

    /// 시세 upsert.
    ///
    /// 카탈로그에 없는 아이템이면 아무것도 쓰지 않고 `Skipped`를 반환합니다.
    async fn upsert_price(&self, quote: &PriceQuote) -> Result<UpsertOutcome>;

    /// 거래 삽입. 같은 거래 ID가 이미 있으면 `Unchanged` (먼저 기록된 값 유지).
    async fn insert_transaction(&self, transaction: &Transaction) -> Result<UpsertOutcome>;

    /// 갱신 마커를 주어진 시각으로 기록합니다.
    async fn touch_marker(&self, marker: UpdateMarker, at: DateTime<Utc>) -> Result<()>;

    /// 마커의 마지막 시각. 기록된 적 없으면 `None`.
    async fn last_modified(&self, marker: UpdateMarker) -> Result<Option<DateTime<Utc>>>;

    /// 테이블의 행 수.
    async fn count(&self, table: TableKind) -> Result<i64>;
}
