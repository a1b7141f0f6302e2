//! 전체 워크플로우.

use super::{collect_latest_prices, collect_reference_prices, collect_transactions, load_items};
use crate::{CollectorContext, LoadReport, Result};
use chrono::Utc;
use koldb_core::TradingWindow;

/// 전체 워크플로우 실행.
///
/// 아이템 카탈로그(설정된 경우) -> 참조가 -> 거래 내역 -> 최신가(추적 아이템이 있을 때).
/// 거래 내역과 최신가는 같은 호스트이므로 사이에 요청 딜레이를 둡니다.
pub async fn run_all(ctx: &CollectorContext) -> Result<Vec<LoadReport>> {
    let mut reports = Vec::new();
    let collect = &ctx.config.collect;

    if let Some(items_file) = &collect.items_file {
        tracing::info!("Step: 아이템 카탈로그 적재");
        let report = load_items(ctx, items_file).await?;
        report.log_summary("아이템 카탈로그 적재");
        reports.push(report);
    }

    tracing::info!("Step: 참조가 수집");
    let report = collect_reference_prices(ctx).await?;
    report.log_summary("참조가 수집");
    reports.push(report);

    tracing::info!("Step: 거래 내역 수집");
    let window = TradingWindow::last_hours(Utc::now(), collect.transaction_window_hours);
    let report = collect_transactions(ctx, None, window).await?;
    report.log_summary("거래 내역 수집");
    reports.push(report);

    if !collect.tracked_items.is_empty() {
        tokio::time::sleep(collect.request_delay()).await;

        tracing::info!("Step: 최신가 수집");
        let report = collect_latest_prices(ctx, &collect.tracked_items).await?;
        report.log_summary("최신가 수집");
        reports.push(report);
    }

    Ok(reports)
}
