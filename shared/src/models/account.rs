//! Account Model
//!
//! Minimal surface of the merchant account: identity plus the subscription
//! state the landing resolver gates on. Account management itself lives in
//! the upstream auth/billing service.

use serde::{Deserialize, Serialize};

/// Subscription state of a merchant account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    #[default]
    Trial,
    Expired,
}

impl SubscriptionStatus {
    /// Whether landing pages may render for this account
    pub fn is_entitled(&self) -> bool {
        matches!(self, SubscriptionStatus::Active | SubscriptionStatus::Trial)
    }
}

/// Merchant account entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub subscription_status: SubscriptionStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entitlement() {
        assert!(SubscriptionStatus::Active.is_entitled());
        assert!(SubscriptionStatus::Trial.is_entitled());
        assert!(!SubscriptionStatus::Expired.is_entitled());
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_string(&SubscriptionStatus::Expired).unwrap(),
            "\"expired\""
        );
        let s: SubscriptionStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(s, SubscriptionStatus::Active);
    }
}
