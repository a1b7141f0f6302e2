//! PostgreSQL 저장소 통합 테스트.
//!
//! `DATABASE_URL`이 가리키는 빈 데이터베이스가 필요합니다.
//! `cargo test -p koldb-data -- --ignored`로 실행합니다.

use chrono::{TimeZone, Utc};
use koldb_core::{Item, PriceQuote, TableKind, Transaction, UpdateMarker, UpsertOutcome};
use koldb_data::{Database, DatabaseConfig, MarketStore, PgMarketStore};
use rust_decimal_macros::dec;

async fn store() -> PgMarketStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL 필요");
    let config = DatabaseConfig {
        url,
        max_connections: 5,
        ..Default::default()
    };
    let db = Database::connect(&config).await.unwrap();
    db.migrate().await.unwrap();
    PgMarketStore::new(db)
}

// 테스트 간 충돌을 피하기 위한 큰 ID 대역
const BASE_ID: i32 = 900_000;

#[tokio::test]
#[ignore]
async fn test_item_name_is_overwritten() {
    let store = store().await;
    let id = BASE_ID + 1;

    store.upsert_item(&Item::new(id, "old name")).await.unwrap();
    store.upsert_item(&Item::new(id, "new name")).await.unwrap();

    let name: String = sqlx::query_scalar("SELECT item_name FROM item WHERE item_id = $1")
        .bind(id)
        .fetch_one(store.database().pool())
        .await
        .unwrap();
    assert_eq!(name, "new name");
}

#[tokio::test]
#[ignore]
async fn test_transaction_keeps_first_write() {
    let store = store().await;
    let item_id = BASE_ID + 2;
    store.upsert_item(&Item::new(item_id, "tx item")).await.unwrap();

    let first = Transaction {
        transaction_id: i64::from(BASE_ID) * 10 + 2,
        item_id,
        volume: 1,
        price: dec!(1398000.00),
        timestamp: 1_674_968_512,
    };
    let replay = Transaction {
        volume: 50,
        ..first.clone()
    };

    store.insert_transaction(&first).await.unwrap();
    let outcome = store.insert_transaction(&replay).await.unwrap();
    assert_eq!(outcome, UpsertOutcome::Unchanged);

    let volume: i32 = sqlx::query_scalar("SELECT volume FROM transactions WHERE trans_id = $1")
        .bind(first.transaction_id)
        .fetch_one(store.database().pool())
        .await
        .unwrap();
    assert_eq!(volume, 1);
}

#[tokio::test]
#[ignore]
async fn test_price_requires_catalog_item() {
    let store = store().await;
    let missing = PriceQuote {
        item_id: BASE_ID + 3,
        price: 10,
        epoch_time: 1,
    };
    assert_eq!(
        store.upsert_price(&missing).await.unwrap(),
        UpsertOutcome::Skipped
    );

    store
        .upsert_item(&Item::new(missing.item_id, "priced"))
        .await
        .unwrap();
    assert_eq!(
        store.upsert_price(&missing).await.unwrap(),
        UpsertOutcome::Written
    );
    assert!(store.count(TableKind::Price).await.unwrap() >= 1);
}

#[tokio::test]
#[ignore]
async fn test_marker_roundtrip() {
    let store = store().await;
    let at = Utc.with_ymd_and_hms(2023, 1, 29, 12, 0, 0).unwrap();

    store.touch_marker(UpdateMarker::GameData, at).await.unwrap();
    assert_eq!(
        store.last_modified(UpdateMarker::GameData).await.unwrap(),
        Some(at)
    );
}

#[tokio::test]
#[ignore]
async fn test_transaction_cost_keeps_full_precision() {
    let store = store().await;
    let item_id = BASE_ID + 4;
    store.upsert_item(&Item::new(item_id, "fractional")).await.unwrap();

    let tx = Transaction {
        transaction_id: i64::from(BASE_ID) * 10 + 4,
        item_id,
        volume: 3,
        price: dec!(1.005),
        timestamp: 1_674_968_600,
    };
    store.insert_transaction(&tx).await.unwrap();

    let cost: rust_decimal::Decimal =
        sqlx::query_scalar("SELECT cost FROM transactions WHERE trans_id = $1")
            .bind(tx.transaction_id)
            .fetch_one(store.database().pool())
            .await
            .unwrap();
    assert_eq!(cost, dec!(1.005));
}
