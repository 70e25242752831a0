//! Validation for machine records

use serde::{Deserialize, Serialize};

use crate::{CardNetwork, Coordinates, PosMachine, VerificationMode};

/// Severity of a validation issue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Validate a machine record and return errors/warnings
pub fn validate_pos_machine(machine: &PosMachine) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    // Required fields
    if machine.merchant_name.trim().is_empty() {
        issues.push(ValidationIssue {
            field: "merchant_name".to_string(),
            message: "Merchant name is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    if !Coordinates::new(machine.latitude, machine.longitude).is_valid() {
        issues.push(ValidationIssue {
            field: "coordinates".to_string(),
            message: "Location is outside valid latitude/longitude bounds".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    // Warnings for recommended fields
    match &machine.basic_info {
        None => {
            issues.push(ValidationIssue {
                field: "basic_info".to_string(),
                message: "Capability details are recommended".to_string(),
                severity: ValidationSeverity::Warning,
            });
        }
        Some(info) => {
            for network in info.supported_card_networks.iter().flatten() {
                if CardNetwork::parse(network).is_none() {
                    issues.push(ValidationIssue {
                        field: "supported_card_networks".to_string(),
                        message: format!("Unrecognized card network: {}", network),
                        severity: ValidationSeverity::Warning,
                    });
                }
            }
            for mode in info.verification_modes.iter().flatten() {
                if VerificationMode::parse(mode).is_none() {
                    issues.push(ValidationIssue {
                        field: "verification_modes".to_string(),
                        message: format!("Unrecognized verification mode: {}", mode),
                        severity: ValidationSeverity::Warning,
                    });
                }
            }
        }
    }

    issues
}
