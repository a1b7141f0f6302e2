//! 저장 대상 테이블과 쓰기 결과 타입.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 적재 대상 테이블.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// `item` 테이블
    Item,
    /// `prices` 테이블
    Price,
    /// `transactions` 테이블
    Transaction,
}

impl TableKind {
    /// 실제 테이블 이름을 반환합니다.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Price => "prices",
            Self::Transaction => "transactions",
        }
    }

    pub fn all() -> [TableKind; 3] {
        [Self::Item, Self::Price, Self::Transaction]
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

/// 단일 행 "마지막 갱신" 마커 테이블.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateMarker {
    /// 원천 데이터를 마지막으로 가져온 시각
    GameData,
    /// DB 적재가 마지막으로 끝난 시각
    Database,
}

impl UpdateMarker {
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::GameData => "game_data_update",
            Self::Database => "db_update",
        }
    }

    pub fn all() -> [UpdateMarker; 2] {
        [Self::GameData, Self::Database]
    }
}

impl fmt::Display for UpdateMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

/// 레코드 한 건의 쓰기 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// 삽입되었거나 갱신됨
    Written,
    /// 이미 존재하여 변경 없음 (거래 중복)
    Unchanged,
    /// 조건 미충족으로 건너뜀 (카탈로그에 없는 아이템의 시세)
    Skipped,
}
