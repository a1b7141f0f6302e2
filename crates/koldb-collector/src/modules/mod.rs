//! 데이터 수집 모듈.

pub mod bulk_load;
pub mod prices;
pub mod snapshot_load;
pub mod status;
pub mod transactions;
pub mod workflow;

pub use bulk_load::{upsert_many, Loadable};
pub use prices::{collect_latest_prices, collect_reference_prices};
pub use snapshot_load::{load_items, load_snapshot, SnapshotKind};
pub use status::{show_status, StoreStatus};
pub use transactions::collect_transactions;
pub use workflow::run_all;
