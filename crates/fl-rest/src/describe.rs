//! Typed sObject metadata.
//!
//! Unlike record payloads, metadata responses have a stable shape across
//! orgs, so they map onto structs. Only `name` and `urls` are required on a
//! summary; everything else defaults when absent so older API versions and
//! partial describes still decode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity and capability metadata for one sObject type.
///
/// Returned both as an element of the global list and from the per-type
/// summary endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SObjectSummary {
    /// API name of the type, e.g. `Account`.
    pub name: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Plural display label.
    #[serde(rename = "labelPlural", default)]
    pub label_plural: String,
    /// Three-character record id prefix, e.g. `001` for Account. Absent for
    /// types that have no id space of their own.
    #[serde(rename = "keyPrefix")]
    pub key_prefix: Option<String>,
    /// Related REST resource paths keyed by name (`sobject`, `describe`,
    /// `rowTemplate`).
    pub urls: HashMap<String, String>,
    #[serde(default)]
    pub custom: bool,
    #[serde(rename = "customSetting", default)]
    pub custom_setting: bool,
    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub updateable: bool,
    #[serde(default)]
    pub deletable: bool,
    #[serde(default)]
    pub undeletable: bool,
    #[serde(default)]
    pub queryable: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub retrieveable: bool,
    #[serde(default)]
    pub layoutable: bool,
    #[serde(default)]
    pub activateable: bool,
}

/// Full structural description of an sObject type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SObjectDetail {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "labelPlural", default)]
    pub label_plural: String,
    #[serde(rename = "keyPrefix")]
    pub key_prefix: Option<String>,
    #[serde(default)]
    pub custom: bool,
    /// Field definitions, in the order the service reports them.
    pub fields: Vec<FieldDescribe>,
    #[serde(rename = "recordTypeInfos", default)]
    pub record_type_infos: Vec<RecordTypeInfo>,
    #[serde(rename = "childRelationships", default)]
    pub child_relationships: Vec<ChildRelationship>,
    #[serde(default)]
    pub urls: HashMap<String, String>,
}

/// One field definition inside a describe response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldDescribe {
    pub name: String,
    #[serde(default)]
    pub label: String,
    /// Field data type as reported by the service, e.g. `id`, `string`,
    /// `picklist`, `reference`.
    #[serde(rename = "type")]
    pub field_type: String,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub digits: Option<u32>,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub nillable: bool,
    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub updateable: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub filterable: bool,
    #[serde(default)]
    pub sortable: bool,
    #[serde(rename = "defaultValue")]
    pub default_value: Option<Value>,
    /// Target types when `field_type` is `reference`.
    #[serde(rename = "referenceTo", default)]
    pub reference_to: Vec<String>,
    #[serde(rename = "relationshipName")]
    pub relationship_name: Option<String>,
    #[serde(rename = "picklistValues", default)]
    pub picklist_values: Vec<PicklistValue>,
}

/// One entry of a picklist field's value set.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PicklistValue {
    pub value: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "defaultValue", default)]
    pub default_value: bool,
}

/// One record type available on the described sObject.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecordTypeInfo {
    pub name: String,
    #[serde(rename = "recordTypeId")]
    pub record_type_id: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub available: bool,
    #[serde(rename = "defaultRecordTypeMapping", default)]
    pub default_record_type_mapping: bool,
}

/// One child relationship pointing back at the described sObject.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChildRelationship {
    /// Field on the child type that references this type.
    pub field: String,
    #[serde(rename = "childSObject")]
    pub child_sobject: String,
    #[serde(rename = "relationshipName")]
    pub relationship_name: Option<String>,
    #[serde(rename = "cascadeDelete")]
    pub cascade_delete: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_deserialization() {
        let summary: SObjectSummary = serde_json::from_value(json!({
            "name": "Account",
            "label": "Account",
            "labelPlural": "Accounts",
            "keyPrefix": "001",
            "custom": false,
            "createable": true,
            "updateable": true,
            "deletable": true,
            "undeletable": true,
            "queryable": true,
            "searchable": true,
            "urls": {
                "sobject": "/services/data/v62.0/sobjects/Account",
                "describe": "/services/data/v62.0/sobjects/Account/describe",
                "rowTemplate": "/services/data/v62.0/sobjects/Account/{ID}"
            }
        }))
        .unwrap();

        assert_eq!(summary.name, "Account");
        assert_eq!(summary.label_plural, "Accounts");
        assert_eq!(summary.key_prefix.as_deref(), Some("001"));
        assert!(summary.undeletable);
        assert!(!summary.custom);
        assert_eq!(
            summary.urls["rowTemplate"],
            "/services/data/v62.0/sobjects/Account/{ID}"
        );
    }

    #[test]
    fn test_summary_requires_name_and_urls() {
        let missing_name = serde_json::from_value::<SObjectSummary>(json!({
            "urls": {"sobject": "/services/data/v62.0/sobjects/Account"}
        }));
        assert!(missing_name.is_err());

        let missing_urls =
            serde_json::from_value::<SObjectSummary>(json!({"name": "Account"}));
        assert!(missing_urls.is_err());
    }

    #[test]
    fn test_summary_flags_default_false_and_key_prefix_optional() {
        let summary: SObjectSummary = serde_json::from_value(json!({
            "name": "AcceptedEventRelation",
            "urls": {"sobject": "/services/data/v62.0/sobjects/AcceptedEventRelation"}
        }))
        .unwrap();

        assert_eq!(summary.key_prefix, None);
        assert!(!summary.createable);
        assert!(!summary.queryable);
        assert!(summary.label.is_empty());
    }

    #[test]
    fn test_detail_deserialization() {
        let detail: SObjectDetail = serde_json::from_value(json!({
            "name": "Account",
            "label": "Account",
            "labelPlural": "Accounts",
            "keyPrefix": "001",
            "custom": false,
            "fields": [
                {
                    "name": "Id",
                    "label": "Account ID",
                    "type": "id",
                    "length": 18,
                    "nillable": false,
                    "createable": false,
                    "updateable": false
                },
                {
                    "name": "Industry",
                    "label": "Industry",
                    "type": "picklist",
                    "length": 40,
                    "nillable": true,
                    "createable": true,
                    "updateable": true,
                    "picklistValues": [
                        {"value": "Agriculture", "label": "Agriculture", "active": true},
                        {"value": "Banking", "label": "Banking", "active": true}
                    ]
                },
                {
                    "name": "ParentId",
                    "label": "Parent Account ID",
                    "type": "reference",
                    "referenceTo": ["Account"],
                    "relationshipName": "Parent",
                    "nillable": true
                }
            ],
            "recordTypeInfos": [
                {
                    "name": "Master",
                    "recordTypeId": "012000000000000AAA",
                    "active": true,
                    "available": true,
                    "defaultRecordTypeMapping": true
                }
            ],
            "childRelationships": [
                {
                    "field": "ParentId",
                    "childSObject": "Account",
                    "relationshipName": "ChildAccounts",
                    "cascadeDelete": false
                },
                {
                    "field": "AccountId",
                    "childSObject": "Contact",
                    "relationshipName": "Contacts",
                    "cascadeDelete": true
                }
            ],
            "urls": {
                "sobject": "/services/data/v62.0/sobjects/Account"
            }
        }))
        .unwrap();

        assert_eq!(detail.fields.len(), 3);
        assert_eq!(detail.fields[0].name, "Id");
        assert_eq!(detail.fields[0].field_type, "id");
        assert_eq!(detail.fields[0].length, Some(18));
        assert_eq!(detail.fields[1].picklist_values.len(), 2);
        assert_eq!(detail.fields[2].reference_to, vec!["Account".to_string()]);
        assert_eq!(detail.fields[2].relationship_name.as_deref(), Some("Parent"));

        assert_eq!(detail.record_type_infos.len(), 1);
        assert_eq!(detail.record_type_infos[0].name, "Master");
        assert!(detail.record_type_infos[0].default_record_type_mapping);

        assert_eq!(detail.child_relationships.len(), 2);
        assert_eq!(detail.child_relationships[0].field, "ParentId");
        assert_eq!(detail.child_relationships[1].child_sobject, "Contact");
        assert_eq!(detail.child_relationships[1].cascade_delete, Some(true));
    }

    #[test]
    fn test_detail_requires_fields() {
        let missing = serde_json::from_value::<SObjectDetail>(json!({
            "name": "Account",
            "urls": {}
        }));
        assert!(missing.is_err());
    }

    #[test]
    fn test_field_unknown_keys_ignored() {
        // Describe payloads carry dozens of attributes beyond what is modeled
        let field: FieldDescribe = serde_json::from_value(json!({
            "name": "Name",
            "label": "Account Name",
            "type": "string",
            "length": 255,
            "autoNumber": false,
            "byteLength": 765,
            "calculated": false,
            "soapType": "xsd:string"
        }))
        .unwrap();
        assert_eq!(field.name, "Name");
        assert_eq!(field.length, Some(255));
    }
}
