//! 마켓 데이터 수집을 위한 도메인 모델.

mod item;
mod price;
mod schema;
mod transaction;

pub use item::*;
pub use price::*;
pub use schema::*;
pub use transaction::*;
