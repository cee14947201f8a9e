use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// Flat snapshot of an upstream Account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    // Account details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rds_management_web_uri: Option<String>,
    #[serde(default)]
    pub signup_via: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_plan: Option<String>,
    #[serde(default)]
    pub support_trial_status: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    // Relation URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_trial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_services: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_databases: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memberships: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_alerts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_certificates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<String>,

    // Timestamps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Resource for Account {
    const PATH: &'static str = "accounts";
    const SINGULAR: &'static str = "account";
    const PLURAL: &'static str = "accounts";

    fn id(&self) -> &str {
        &self.id
    }
}

/// The aspects of an Account the API allows changing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_plan: Option<String>,
}

impl AccountChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.emergency_contact.is_none() && self.support_plan.is_none()
    }
}
