//! 마켓 데이터 수집 및 저장.
//!
//! 이 crate는 다음을 제공합니다:
//! - 원천 요청 URL 생성 (`provider::urls`)
//! - ColdFront / KoLmafia HTTP 클라이언트 (`provider::market`)
//! - XML / `<br>` 구분 / 공백 구분 응답 디코더 (`parser`)
//! - PostgreSQL 및 메모리 저장소 (`storage`)
//! - JSON 스냅샷 입출력 (`snapshot`)

pub mod error;
pub mod parser;
pub mod provider;
pub mod snapshot;
pub mod storage;

pub use error::{DataError, Result};

pub use parser::{Decoded, ParseMode, RejectedLine};
pub use provider::{Endpoints, KolMarketClient, MAX_LATEST_PRICE_ITEMS};
pub use snapshot::{read_snapshot, write_snapshot, SnapshotPaths};
pub use storage::{
    Database, DatabaseConfig, InMemoryMarketStore, MarketStore, PgMarketStore,
};
