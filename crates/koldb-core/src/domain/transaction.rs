//! 마켓 거래 내역 레코드.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 과거에 체결된 한 건의 마켓 거래.
///
/// `transaction_id`는 원천(ColdFront)에서 부여한 값입니다.
/// 한 번 기록된 거래는 변경되지 않으므로 저장 시 중복은 무시됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// 거래 ID
    #[serde(rename = "transactionID", alias = "trans")]
    pub transaction_id: i64,
    /// 아이템 ID
    #[serde(rename = "itemID", alias = "itemid")]
    pub item_id: i32,
    /// 거래 수량
    #[serde(alias = "vol")]
    pub volume: i32,
    /// 개당 가격 (소수점 포함)
    pub price: Decimal,
    /// 체결 시각 (epoch 초)
    #[serde(alias = "time")]
    pub timestamp: i64,
}
