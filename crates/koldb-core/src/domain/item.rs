//! 아이템 카탈로그 레코드.

use serde::{Deserialize, Serialize};

/// 거래 가능한(또는 과거에 거래 가능했던) 아이템.
///
/// 식별자는 `id`이며, 이름은 게임 쪽 변경에 따라 덮어써질 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// 아이템 ID
    #[serde(alias = "itemID", alias = "itemid")]
    pub id: i32,
    /// 아이템 이름
    pub name: String,
}

impl Item {
    /// 새 아이템 레코드를 생성합니다.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_field_names() {
        let item = Item::new(194, "Mr. Accessory");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 194);
        assert_eq!(json["name"], "Mr. Accessory");
        assert!(json.get("itemID").is_none());
    }

    #[test]
    fn test_item_snapshot_roundtrip() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"id":194,"name":"Mr. Accessory"}]"#).unwrap();
        assert_eq!(items, vec![Item::new(194, "Mr. Accessory")]);

        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(json, r#"[{"id":194,"name":"Mr. Accessory"}]"#);

        let long_form: Item = serde_json::from_str(r#"{"itemID":2,"name":"club"}"#).unwrap();
        assert_eq!(long_form, Item::new(2, "club"));
    }

    #[test]
    fn test_item_accepts_legacy_snapshot() {
        let item: Item = serde_json::from_str(r#"{"name":"seal-clubbing club","itemid":1}"#).unwrap();
        assert_eq!(item, Item::new(1, "seal-clubbing club"));
    }
}
