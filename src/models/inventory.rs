use serde::{Deserialize, Serialize};

/// One reported damage. Fields the backend omits stay at their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DamageRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reported_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl DamageRecord {
    pub fn is_pending(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("pending"))
            .unwrap_or(false)
    }
}

/// Payload of `GET /api/damages/`; replaces the previous snapshot wholesale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DamagesSnapshot {
    #[serde(default)]
    pub damaged_items: Vec<DamageRecord>,
    #[serde(default)]
    pub total_damages: u64,
    #[serde(default)]
    pub total_pending_damages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Notification {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counters_default_to_zero() {
        let snapshot: DamagesSnapshot = serde_json::from_str(r#"{"damaged_items": []}"#).unwrap();
        assert_eq!(snapshot, DamagesSnapshot::default());
    }

    #[test]
    fn pending_status_is_case_insensitive() {
        let record = DamageRecord { status: Some("Pending".into()), ..Default::default() };
        assert!(record.is_pending());
        assert!(!DamageRecord::default().is_pending());
    }
}
