//! Menu model matching the `/api/menus` payload.

use serde::{Deserialize, Serialize};

/// One meal of the day: a primary dish and an optional second one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub p1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2: Option<String>,
}

impl Meal {
    pub fn new(p1: &str, p2: Option<&str>) -> Self {
        Self {
            p1: p1.to_string(),
            p2: p2.map(str::to_string),
        }
    }
}

/// One calendar day's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    /// Date key in `YYYYMMDD` form
    pub id: u32,
    /// Display label, e.g. "Viernes 14"
    pub day: String,
    /// Permalink for the day's menu
    pub url: String,
    pub lunch: Meal,
    pub dinner: Meal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_record_with_missing_and_null_p2() {
        let raw = r#"{
            "id": 20190614,
            "day": "Viernes 14",
            "url": "https://example.org/menus/14",
            "lunch": {"p1": "lentejas", "p2": null},
            "dinner": {"p1": "tortilla"}
        }"#;
        let record: MenuRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, 20190614);
        assert_eq!(record.lunch, Meal::new("lentejas", None));
        assert_eq!(record.dinner.p2, None);
    }

    #[test]
    fn test_decode_rejects_missing_p1() {
        let raw = r#"{
            "id": 20190614,
            "day": "Viernes 14",
            "url": "https://example.org/menus/14",
            "lunch": {"p2": "fruta"},
            "dinner": {"p1": "tortilla"}
        }"#;
        assert!(serde_json::from_str::<MenuRecord>(raw).is_err());
    }

    #[test]
    fn test_serialize_omits_absent_p2() {
        let meal = Meal::new("sopa", None);
        assert_eq!(serde_json::to_string(&meal).unwrap(), r#"{"p1":"sopa"}"#);
    }
}
