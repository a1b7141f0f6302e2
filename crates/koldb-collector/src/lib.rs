//! KoL 마켓 데이터 수집기.
//!
//! 이 crate는 원천 데이터를 수집하여 데이터베이스에 적재하는 바이너리를 제공합니다:
//! - 거래 내역 수집 (ColdFront export)
//! - 참조가 수집 (KoLmafia 가격 맵)
//! - 최신가 수집 (ColdFront 최신 체결가)
//! - 아이템 카탈로그 및 스냅샷 적재

pub mod config;
pub mod context;
pub mod error;
pub mod modules;
pub mod stats;

pub use config::CollectorConfig;
pub use context::CollectorContext;
pub use error::{CollectorError, Result};
pub use stats::{LoadFailure, LoadReport};
