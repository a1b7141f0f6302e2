//! 거래 내역 수집 모듈.

use super::bulk_load::upsert_many;
use crate::{CollectorContext, LoadReport, Result};
use chrono::Utc;
use koldb_core::{TradingWindow, UpdateMarker};
use koldb_data::write_snapshot;

/// 구간 내 거래 내역을 조회하여 적재합니다.
///
/// `item_id`가 없으면 전체 아이템을 조회합니다.
pub async fn collect_transactions(
    ctx: &CollectorContext,
    item_id: Option<i32>,
    window: TradingWindow,
) -> Result<LoadReport> {
    tracing::info!(window = %window, item_id = ?item_id, "거래 내역 수집 시작");

    let transactions = ctx.client.fetch_transactions(window, item_id).await?;
    ctx.store()
        .touch_marker(UpdateMarker::GameData, Utc::now())
        .await?;

    if ctx.config.snapshot.write {
        write_snapshot(&ctx.snapshot_paths().transactions(), &transactions).await?;
    }

    let report = upsert_many(
        ctx.store(),
        &transactions,
        ctx.config.collect.load_concurrency,
    )
    .await;

    ctx.store()
        .touch_marker(UpdateMarker::Database, Utc::now())
        .await?;

    Ok(report)
}
