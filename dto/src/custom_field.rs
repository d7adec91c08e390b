use crate::domain::ApplicableDomains;
use crate::person::PersonId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type FieldId = i32;

/// Values of custom fields for a single person, by field.
pub type AttributeValues = BTreeMap<FieldId, String>;

/// A field defined by an operator on top of the fixed person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CustomField {
    id: FieldId,
    field_name: String,
    display_name: String,
    applicable_domains: ApplicableDomains,
}

impl CustomField {
    pub fn new(
        id: FieldId,
        field_name: String,
        display_name: String,
        applicable_domains: ApplicableDomains,
    ) -> Self {
        Self {
            id,
            field_name,
            display_name,
            applicable_domains,
        }
    }
}

/// The value a person holds for a custom field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MemberAttribute {
    member_id: PersonId,
    field_id: FieldId,
    field_name: String,
    display_name: String,
    value: Option<String>,
}

impl MemberAttribute {
    pub fn new(
        member_id: PersonId,
        field_id: FieldId,
        field_name: String,
        display_name: String,
        value: Option<String>,
    ) -> Self {
        Self {
            member_id,
            field_id,
            field_name,
            display_name,
            value,
        }
    }
}
