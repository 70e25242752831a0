//! POS machine domain model

use serde::{Deserialize, Serialize};

use crate::MachineStatus;

/// Capability metadata nested under a machine record.
///
/// All fields are free-form user entry; canonical values are only
/// suggested by the capability enums, never enforced at this level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub model: Option<String>,
    pub acquiring_institution: Option<String>,
    pub supported_card_networks: Option<Vec<String>>,
    pub verification_modes: Option<Vec<String>>,
}

/// A recorded point-of-sale terminal at a merchant location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PosMachine {
    pub id: String,
    pub merchant_name: String,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub remarks: Option<String>,
    pub fees: Option<String>,
    pub status: MachineStatus,
    pub basic_info: Option<BasicInfo>,

    // Metadata
    pub created_at: Option<String>,  // ISO 8601
    pub modified_at: Option<String>, // ISO 8601
}

impl PosMachine {
    /// Create a new machine record with required fields.
    pub fn new(merchant_name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            merchant_name: merchant_name.into(),
            address: None,
            latitude,
            longitude,
            remarks: None,
            fees: None,
            status: MachineStatus::default(),
            basic_info: None,
            created_at: None,
            modified_at: None,
        }
    }

    /// Builder method to add a street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builder method to add free-form remarks.
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Builder method to add capability metadata.
    pub fn with_basic_info(mut self, basic_info: BasicInfo) -> Self {
        self.basic_info = Some(basic_info);
        self
    }

    /// Builder method to set the lifecycle status.
    pub fn with_status(mut self, status: MachineStatus) -> Self {
        self.status = status;
        self
    }

    /// Stamp the record as modified now (RFC 3339, UTC).
    pub fn touch(&mut self) {
        let now = chrono::Utc::now().to_rfc3339();
        if self.created_at.is_none() {
            self.created_at = Some(now.clone());
        }
        self.modified_at = Some(now);
    }
}
