//! Terminal capability enums.

use serde::{Deserialize, Serialize};

/// Card network a terminal accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardNetwork {
    Visa,
    Mastercard,
    UnionPay,
    Amex,
    Jcb,
    Discover,
}

impl CardNetwork {
    /// Parse from a user-entered label. Case insensitive, common aliases accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "visa" => Some(Self::Visa),
            "mastercard" | "master" | "mc" => Some(Self::Mastercard),
            "unionpay" | "union pay" | "cup" | "银联" => Some(Self::UnionPay),
            "amex" | "american express" => Some(Self::Amex),
            "jcb" => Some(Self::Jcb),
            "discover" => Some(Self::Discover),
            _ => None,
        }
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::UnionPay => "UnionPay",
            Self::Amex => "American Express",
            Self::Jcb => "JCB",
            Self::Discover => "Discover",
        }
    }

    /// Canonical lowercase identifier used in stored records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::UnionPay => "unionpay",
            Self::Amex => "amex",
            Self::Jcb => "jcb",
            Self::Discover => "discover",
        }
    }
}

/// Cardholder verification mode supported by a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationMode {
    Pin,
    Signature,
    Tap,
    NoCvm,
}

impl VerificationMode {
    /// Parse from a user-entered label.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pin" => Some(Self::Pin),
            "signature" | "sign" => Some(Self::Signature),
            "tap" | "contactless" | "nfc" => Some(Self::Tap),
            "none" | "no cvm" | "no-cvm" => Some(Self::NoCvm),
            _ => None,
        }
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pin => "PIN",
            Self::Signature => "Signature",
            Self::Tap => "Contactless",
            Self::NoCvm => "No CVM",
        }
    }

    /// Canonical lowercase identifier used in stored records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pin => "pin",
            Self::Signature => "signature",
            Self::Tap => "tap",
            Self::NoCvm => "none",
        }
    }
}

/// Lifecycle status of a recorded terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MachineStatus {
    Active,
    Inactive,
    #[default]
    Unverified,
}

impl MachineStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Unverified => "Unverified",
        }
    }
}
