//! Node details — the flat (label, value, icon) list shown for a selected account.
//!
//! Known field groups come first, each contributing at most one entry. Every
//! other non-empty attribute follows under a label derived from its header.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::rows::{CellValue, FieldMap};

/// Icon category for a detail entry. Rendering picks the actual glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailIcon {
    Account,
    Serial,
    Document,
    Bank,
    Location,
    Region,
    Police,
    Person,
    Phone,
    Email,
    Home,
    Package,
    Calendar,
    Status,
    Message,
    Layers,
    Spreadsheet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailField {
    pub label: String,
    pub value: CellValue,
    pub icon: DetailIcon,
}

struct FieldGroup {
    label: &'static str,
    icon: DetailIcon,
    keys: &'static [&'static str],
}

const FIELD_GROUPS: &[FieldGroup] = &[
    FieldGroup {
        label: "Account Number",
        icon: DetailIcon::Account,
        keys: &[
            "accountNo", "accountno", "Account No", "Account No.", "AccountNo", "Account_No",
            "acc_no", "Acknowledgement N", "AcknowledgementN",
        ],
    },
    FieldGroup {
        label: "Serial Number",
        icon: DetailIcon::Serial,
        keys: &["sNo", "sno", "S.No", "S No", "SNo", "Serial No", "SerialNo", "serial_no"],
    },
    FieldGroup {
        label: "Acknowledgement",
        icon: DetailIcon::Document,
        keys: &[
            "acknowledgementN", "acknowledgementn", "Acknowledgement N", "Acknowledgement",
            "AcknowledgementN", "ack_no",
        ],
    },
    FieldGroup {
        label: "IFSC Code",
        icon: DetailIcon::Bank,
        keys: &["ifscCode", "ifsccode", "IFSC Code", "IFSCCode", "IFSC", "ifsc_code", "ifsc"],
    },
    FieldGroup {
        label: "State",
        icon: DetailIcon::Location,
        keys: &["state", "State", "STATE", "state_name", "StateName"],
    },
    FieldGroup {
        label: "District",
        icon: DetailIcon::Region,
        keys: &["district", "District", "DISTRICT", "district_name", "DistrictName"],
    },
    FieldGroup {
        label: "Police Station",
        icon: DetailIcon::Police,
        keys: &[
            "policeStation", "policestation", "Police Station", "PoliceStation",
            "police Station Name of Complain reported officer", "PS Name", "ps_name",
            "police_station",
        ],
    },
    FieldGroup {
        label: "Designation",
        icon: DetailIcon::Person,
        keys: &["designation", "Designation", "DESIGNATION", "post", "Post", "Position"],
    },
    FieldGroup {
        label: "Mobile Number",
        icon: DetailIcon::Phone,
        keys: &[
            "mobileNumber", "mobilenumber", "Mobile Number", "MobileNumber", "Mobile", "mobile",
            "Phone", "phone", "Contact", "contact_no", "mobile_no",
        ],
    },
    FieldGroup {
        label: "Email",
        icon: DetailIcon::Email,
        keys: &["email", "Email", "EMAIL", "E-mail", "e-mail", "EmailID", "email_id", "email_address"],
    },
    FieldGroup {
        label: "Name",
        icon: DetailIcon::Person,
        keys: &["name", "Name", "NAME", "full_name", "FullName", "PersonName", "person_name"],
    },
    FieldGroup {
        label: "Address",
        icon: DetailIcon::Home,
        keys: &["address", "Address", "ADDRESS", "full_address", "FullAddress"],
    },
    FieldGroup {
        label: "Pincode",
        icon: DetailIcon::Location,
        keys: &["pincode", "Pincode", "PINCODE", "PIN", "pin", "postal_code", "PostalCode", "zip"],
    },
    FieldGroup {
        label: "Amount",
        icon: DetailIcon::Package,
        keys: &[
            "amount", "Amount", "AMOUNT", "transaction_amount", "TransactionAmount", "value",
            "Value",
        ],
    },
    FieldGroup {
        label: "Date",
        icon: DetailIcon::Calendar,
        keys: &[
            "date", "Date", "DATE", "transaction_date", "TransactionDate", "timestamp",
            "Timestamp",
        ],
    },
    FieldGroup {
        label: "Status",
        icon: DetailIcon::Status,
        keys: &["status", "Status", "STATUS", "transaction_status", "TransactionStatus"],
    },
    FieldGroup {
        label: "Remarks",
        icon: DetailIcon::Message,
        keys: &[
            "remarks", "Remarks", "REMARKS", "comments", "Comments", "notes", "Notes",
            "description", "Description",
        ],
    },
    FieldGroup {
        label: "Layer",
        icon: DetailIcon::Layers,
        keys: &["layer", "Layer", "LAYER", "level", "Level"],
    },
];

/// Keys that carry bookkeeping, never data.
const INTERNAL_KEYS: &[&str] = &["children", "__rowNum__"];

static CAPITAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([A-Z])").expect("static regex is valid"));

/// `"ifsc_code"` → `"ifsc code"`, `"transactionRef"` → `"transaction Ref"`.
pub fn humanize_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    CAPITAL.replace_all(&spaced, " $1").trim().to_string()
}

/// Derive the detail list for one node's attributes.
pub fn node_details(attributes: &FieldMap) -> Vec<DetailField> {
    let mut fields: Vec<DetailField> = Vec::new();

    for group in FIELD_GROUPS {
        let hit = group
            .keys
            .iter()
            .find_map(|k| attributes.get(k).filter(|v| !v.is_empty()));
        if let Some(value) = hit {
            fields.push(DetailField {
                label: group.label.to_string(),
                value: value.clone(),
                icon: group.icon,
            });
        }
    }

    for (key, value) in attributes.iter() {
        if INTERNAL_KEYS.contains(&key) || value.is_empty() {
            continue;
        }
        // A value already shown under a known label is not repeated.
        if fields.iter().any(|f| f.value == *value) {
            continue;
        }
        fields.push(DetailField {
            label: humanize_label(key),
            value: value.clone(),
            icon: DetailIcon::Spreadsheet,
        });
    }

    fields
}

#[cfg(test)]
#[path = "../../tests/rust/test_hierarchy_details.rs"]
mod tests;
