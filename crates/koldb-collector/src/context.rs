//! 워크플로우 실행 컨텍스트.

use crate::{CollectorConfig, Result};
use koldb_data::{KolMarketClient, MarketStore, SnapshotPaths};
use std::sync::Arc;

/// 수집 워크플로우가 공유하는 저장소, 원천 클라이언트, 설정.
#[derive(Clone)]
pub struct CollectorContext {
    pub store: Arc<dyn MarketStore>,
    pub client: KolMarketClient,
    pub config: CollectorConfig,
}

impl CollectorContext {
    pub fn new(store: Arc<dyn MarketStore>, client: KolMarketClient, config: CollectorConfig) -> Self {
        Self {
            store,
            client,
            config,
        }
    }

    /// 설정의 엔드포인트로 원천 클라이언트를 만들어 컨텍스트를 생성합니다.
    pub fn from_config(store: Arc<dyn MarketStore>, config: CollectorConfig) -> Result<Self> {
        let client = KolMarketClient::new(config.endpoints.to_endpoints()?);
        Ok(Self::new(store, client, config))
    }

    pub fn store(&self) -> &dyn MarketStore {
        self.store.as_ref()
    }

    pub fn snapshot_paths(&self) -> SnapshotPaths {
        SnapshotPaths::new(&self.config.snapshot.dir)
    }
}
