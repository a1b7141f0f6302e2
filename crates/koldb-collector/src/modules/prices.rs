//! 시세 수집 모듈.
//!
//! - 참조가: KoLmafia 가격 맵 전체
//! - 최신가: ColdFront 최신 체결가 (요청당 10개씩)
//!
//! 두 경우 모두 카탈로그에 있는 아이템의 시세만 저장됩니다.

use super::bulk_load::upsert_many;
use crate::{CollectorContext, CollectorError, LoadReport, Result};
use chrono::Utc;
use koldb_core::{PriceQuote, UpdateMarker};
use koldb_data::write_snapshot;

/// 참조가 전체를 조회하여 적재합니다.
pub async fn collect_reference_prices(ctx: &CollectorContext) -> Result<LoadReport> {
    tracing::info!("참조가 수집 시작");

    let decoded = ctx
        .client
        .fetch_reference_prices(ctx.config.collect.parse_mode)
        .await?;
    ctx.store()
        .touch_marker(UpdateMarker::GameData, Utc::now())
        .await?;

    if ctx.config.snapshot.write {
        write_snapshot(&ctx.snapshot_paths().reference_prices(), &decoded.records).await?;
    }

    let quotes: Vec<PriceQuote> = decoded.records.into_iter().map(PriceQuote::from).collect();
    let report = upsert_many(ctx.store(), &quotes, ctx.config.collect.load_concurrency).await;

    ctx.store()
        .touch_marker(UpdateMarker::Database, Utc::now())
        .await?;

    Ok(report)
}

/// 지정한 아이템의 최신가를 조회하여 적재합니다.
///
/// 최신가에는 시각이 없으므로 조회 완료 시각으로 기록합니다.
pub async fn collect_latest_prices(ctx: &CollectorContext, item_ids: &[i32]) -> Result<LoadReport> {
    if item_ids.is_empty() {
        return Err(CollectorError::Config(
            "최신가를 조회할 아이템이 없습니다 (--items 또는 TRACKED_ITEMS)".to_string(),
        ));
    }

    tracing::info!(items = item_ids.len(), "최신가 수집 시작");

    let decoded = ctx
        .client
        .fetch_latest_prices_batched(
            item_ids,
            ctx.config.collect.parse_mode,
            ctx.config.collect.request_delay(),
        )
        .await?;

    let observed_at = Utc::now();
    ctx.store()
        .touch_marker(UpdateMarker::GameData, observed_at)
        .await?;

    if ctx.config.snapshot.write {
        write_snapshot(&ctx.snapshot_paths().latest_prices(), &decoded.records).await?;
    }

    let quotes: Vec<PriceQuote> = decoded
        .records
        .iter()
        .map(|p| p.observed_at(observed_at.timestamp()))
        .collect();
    let report = upsert_many(ctx.store(), &quotes, ctx.config.collect.load_concurrency).await;

    ctx.store()
        .touch_marker(UpdateMarker::Database, Utc::now())
        .await?;

    Ok(report)
}
