//! 저장소 상태 조회 모듈.

use crate::Result;
use chrono::{DateTime, Utc};
use koldb_core::{TableKind, UpdateMarker};
use koldb_data::MarketStore;

/// 갱신 마커와 테이블 행 수.
#[derive(Debug, Clone)]
pub struct StoreStatus {
    pub markers: Vec<(UpdateMarker, Option<DateTime<Utc>>)>,
    pub counts: Vec<(TableKind, i64)>,
}

impl StoreStatus {
    pub fn last_modified(&self, marker: UpdateMarker) -> Option<DateTime<Utc>> {
        self.markers
            .iter()
            .find(|(m, _)| *m == marker)
            .and_then(|(_, at)| *at)
    }

    pub fn count(&self, table: TableKind) -> i64 {
        self.counts
            .iter()
            .find(|(t, _)| *t == table)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn log_summary(&self) {
        for (marker, at) in &self.markers {
            match at {
                Some(at) => tracing::info!(marker = %marker, last_modified = %at, "갱신 마커"),
                None => tracing::info!(marker = %marker, "갱신 기록 없음"),
            }
        }
        for (table, count) in &self.counts {
            tracing::info!(table = %table, rows = count, "테이블 행 수");
        }
    }
}

/// 두 갱신 마커와 테이블별 행 수를 조회합니다.
pub async fn show_status(store: &dyn MarketStore) -> Result<StoreStatus> {
    let mut markers = Vec::new();
    for marker in UpdateMarker::all() {
        markers.push((marker, store.last_modified(marker).await?));
    }

    let mut counts = Vec::new();
    for table in TableKind::all() {
        counts.push((table, store.count(table).await?));
    }

    Ok(StoreStatus { markers, counts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use koldb_core::Item;
    use koldb_data::InMemoryMarketStore;

    #[tokio::test]
    async fn test_status_of_fresh_store() {
        let store = InMemoryMarketStore::new();
        store.upsert_item(&Item::new(1, "a")).await.unwrap();

        let status = show_status(&store).await.unwrap();
        assert_eq!(status.last_modified(UpdateMarker::GameData), None);
        assert_eq!(status.count(TableKind::Item), 1);
        assert_eq!(status.count(TableKind::Transaction), 0);
    }
}
