//! 스냅샷 파일 적재 모듈.

use super::bulk_load::{upsert_many, Loadable};
use crate::{CollectorContext, LoadReport, Result};
use chrono::Utc;
use koldb_core::{Item, LatestPrice, PriceQuote, ReferencePrice, Transaction, UpdateMarker};
use koldb_data::{read_snapshot, SnapshotPaths};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 스냅샷 파일 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    Items,
    Transactions,
    LatestPrices,
    ReferencePrices,
}

impl SnapshotKind {
    /// 스냅샷 디렉터리 안의 표준 경로
    pub fn default_path(&self, paths: &SnapshotPaths) -> PathBuf {
        match self {
            Self::Items => paths.items(),
            Self::Transactions => paths.transactions(),
            Self::LatestPrices => paths.latest_prices(),
            Self::ReferencePrices => paths.reference_prices(),
        }
    }
}

impl FromStr for SnapshotKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "items" | "item" => Ok(Self::Items),
            "transactions" | "transaction" => Ok(Self::Transactions),
            "latest-prices" | "latest" => Ok(Self::LatestPrices),
            "reference-prices" | "reference" | "prices" => Ok(Self::ReferencePrices),
            _ => Err(format!("Unknown snapshot kind: {}", s)),
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Items => "items",
            Self::Transactions => "transactions",
            Self::LatestPrices => "latest-prices",
            Self::ReferencePrices => "reference-prices",
        };
        write!(f, "{}", name)
    }
}

/// 아이템 카탈로그 스냅샷을 적재합니다.
pub async fn load_items(ctx: &CollectorContext, path: &Path) -> Result<LoadReport> {
    let items: Vec<Item> = read_snapshot(path).await?;
    load_records(ctx, &items).await
}

/// 스냅샷 파일을 해당 테이블에 적재합니다.
///
/// 최신가 스냅샷에는 시각이 없으므로 적재 시각으로 기록합니다.
pub async fn load_snapshot(
    ctx: &CollectorContext,
    kind: SnapshotKind,
    path: &Path,
) -> Result<LoadReport> {
    tracing::info!(kind = %kind, path = %path.display(), "스냅샷 적재 시작");

    match kind {
        SnapshotKind::Items => load_items(ctx, path).await,
        SnapshotKind::Transactions => {
            let transactions: Vec<Transaction> = read_snapshot(path).await?;
            load_records(ctx, &transactions).await
        }
        SnapshotKind::ReferencePrices => {
            let prices: Vec<ReferencePrice> = read_snapshot(path).await?;
            let quotes: Vec<PriceQuote> = prices.into_iter().map(PriceQuote::from).collect();
            load_records(ctx, &quotes).await
        }
        SnapshotKind::LatestPrices => {
            let prices: Vec<LatestPrice> = read_snapshot(path).await?;
            let now = Utc::now().timestamp();
            let quotes: Vec<PriceQuote> = prices.iter().map(|p| p.observed_at(now)).collect();
            load_records(ctx, &quotes).await
        }
    }
}

async fn load_records<T: Loadable>(ctx: &CollectorContext, records: &[T]) -> Result<LoadReport> {
    let report = upsert_many(ctx.store(), records, ctx.config.collect.load_concurrency).await;
    ctx.store()
        .touch_marker(UpdateMarker::Database, Utc::now())
        .await?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_kind_from_str() {
        assert_eq!("items".parse::<SnapshotKind>().unwrap(), SnapshotKind::Items);
        assert_eq!(
            "latest_prices".parse::<SnapshotKind>().unwrap(),
            SnapshotKind::LatestPrices
        );
        assert_eq!(
            "Reference-Prices".parse::<SnapshotKind>().unwrap(),
            SnapshotKind::ReferencePrices
        );
        assert!("orders".parse::<SnapshotKind>().is_err());
    }

    #[test]
    fn test_default_paths() {
        let paths = SnapshotPaths::new("/tmp/koldb");
        assert_eq!(
            SnapshotKind::Transactions.default_path(&paths),
            PathBuf::from("/tmp/koldb/transactions.json")
        );
    }
}
