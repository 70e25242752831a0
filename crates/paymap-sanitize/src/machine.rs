//! Machine record sanitization before persistence.
//!
//! Allow-list transform: only the named text fields are rewritten, every
//! other field passes through unchanged.

use paymap_domain::{BasicInfo, PosMachine};

use crate::text::{sanitize_plain_text, SanitizeOptions};

const MERCHANT_NAME_MAX: usize = 120;
const ADDRESS_MAX: usize = 320;
const REMARKS_MAX: usize = 2000;
const MODEL_MAX: usize = 60;
const INSTITUTION_MAX: usize = 120;
const LIST_ITEM_MAX: usize = 40;
const LIST_MAX_ITEMS: usize = 20;

/// Sanitize the user-entered text fields of a machine record.
///
/// Rewrites `merchant_name`, `address`, `remarks` (line breaks kept), and
/// the nested `basic_info` strings and string lists. List elements are
/// sanitized individually, empties dropped, and the list capped at 20
/// entries. Identity, location, status, and timestamps are copied
/// through untouched.
pub fn sanitize_pos_machine(machine: &PosMachine) -> PosMachine {
    let mut sanitized = machine.clone();

    sanitized.merchant_name = sanitize_plain_text(
        &machine.merchant_name,
        &SanitizeOptions::with_max_length(MERCHANT_NAME_MAX),
    );

    if let Some(address) = &machine.address {
        sanitized.address = Some(sanitize_plain_text(
            address,
            &SanitizeOptions::with_max_length(ADDRESS_MAX),
        ));
    }

    if let Some(remarks) = &machine.remarks {
        sanitized.remarks = Some(sanitize_plain_text(
            remarks,
            &SanitizeOptions::multiline(REMARKS_MAX),
        ));
    }

    if let Some(info) = &machine.basic_info {
        sanitized.basic_info = Some(sanitize_basic_info(info));
    }

    sanitized
}

fn sanitize_basic_info(info: &BasicInfo) -> BasicInfo {
    let mut sanitized = info.clone();

    if let Some(model) = &info.model {
        sanitized.model = Some(sanitize_plain_text(
            model,
            &SanitizeOptions::with_max_length(MODEL_MAX),
        ));
    }

    if let Some(institution) = &info.acquiring_institution {
        sanitized.acquiring_institution = Some(sanitize_plain_text(
            institution,
            &SanitizeOptions::with_max_length(INSTITUTION_MAX),
        ));
    }

    if let Some(networks) = &info.supported_card_networks {
        sanitized.supported_card_networks = Some(sanitize_list(networks));
    }

    if let Some(modes) = &info.verification_modes {
        sanitized.verification_modes = Some(sanitize_list(modes));
    }

    sanitized
}

fn sanitize_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| sanitize_plain_text(value, &SanitizeOptions::with_max_length(LIST_ITEM_MAX)))
        .filter(|value| !value.is_empty())
        .take(LIST_MAX_ITEMS)
        .collect()
}
