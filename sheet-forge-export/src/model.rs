//! The engine's typed config JSON.
//!
//! Every exported file is a dictionary whose entries pair a typed key with a
//! struct value:
//!
//! ```text
//! {
//!   "type": "Dict",
//!   "key_type": "Int32",
//!   "value_type": "Struct",
//!   "value": [
//!     { "key":   { "param_type": "Int32", "value": "1" },
//!       "value": { "param_type": "Struct",
//!                  "value": { "structId": "1077936134", "type": "Struct", "value": [ ... ] } } }
//!   ],
//!   "value_structId": "1077936134"
//! }
//! ```
//!
//! Scalars are always strings, even integers. Field order is significant to
//! the importer, so the structs below declare fields in output order.

use serde::Serialize;

/// Type tag attached to every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamType {
    String,
    Int32,
    ConfigReference,
    EntityReference,
    Struct,
    StructList,
}

/// A typed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub param_type: ParamType,
    pub value: ParamValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(String),
    Struct(StructValue),
    List(StructList),
}

/// Struct body: schema id plus ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructValue {
    #[serde(rename = "structId")]
    pub struct_id: String,
    #[serde(rename = "type")]
    pub kind: ParamType,
    pub value: Vec<Param>,
}

/// List of structs sharing one schema id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructList {
    #[serde(rename = "structId")]
    pub struct_id: String,
    pub value: Vec<Param>,
}

impl Param {
    pub fn scalar(param_type: ParamType, value: impl Into<String>) -> Self {
        Self {
            param_type,
            value: ParamValue::Scalar(value.into()),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::scalar(ParamType::String, value)
    }

    pub fn int32(value: impl Into<String>) -> Self {
        Self::scalar(ParamType::Int32, value)
    }

    pub fn config_ref(value: impl Into<String>) -> Self {
        Self::scalar(ParamType::ConfigReference, value)
    }

    pub fn entity_ref(value: impl Into<String>) -> Self {
        Self::scalar(ParamType::EntityReference, value)
    }

    pub fn structure(struct_id: impl Into<String>, fields: Vec<Param>) -> Self {
        Self {
            param_type: ParamType::Struct,
            value: ParamValue::Struct(StructValue {
                struct_id: struct_id.into(),
                kind: ParamType::Struct,
                value: fields,
            }),
        }
    }

    pub fn struct_list(struct_id: impl Into<String>, items: Vec<Param>) -> Self {
        Self {
            param_type: ParamType::StructList,
            value: ParamValue::List(StructList {
                struct_id: struct_id.into(),
                value: items,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DictKind {
    Dict,
}

/// One key/value pair of a [`ConfigDict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictEntry {
    pub key: Param,
    pub value: Param,
}

/// A dictionary of structs, the root of every exported file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigDict {
    #[serde(rename = "type")]
    kind: DictKind,
    key_type: ParamType,
    value_type: ParamType,
    value: Vec<DictEntry>,
    #[serde(rename = "value_structId")]
    value_struct_id: String,
}

impl ConfigDict {
    /// An empty dictionary keyed by `key_type`, holding `struct_id` structs.
    pub fn new(key_type: ParamType, struct_id: impl Into<String>) -> Self {
        Self {
            kind: DictKind::Dict,
            key_type,
            value_type: ParamType::Struct,
            value: Vec::new(),
            value_struct_id: struct_id.into(),
        }
    }

    pub fn key_type(&self) -> ParamType {
        self.key_type
    }

    pub fn struct_id(&self) -> &str {
        &self.value_struct_id
    }

    pub fn entries(&self) -> &[DictEntry] {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Append an entry whose struct value carries `fields`.
    pub fn insert(&mut self, key: impl Into<String>, fields: Vec<Param>) {
        let key = Param::scalar(self.key_type, key);
        let value = Param::structure(self.value_struct_id.clone(), fields);
        self.value.push(DictEntry { key, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dict_serializes_in_engine_order() {
        let mut dict = ConfigDict::new(ParamType::String, "42");
        dict.insert("史莱姆", vec![Param::entity_ref("7"), Param::int32("5")]);

        let json = serde_json::to_string(&dict).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"type":"Dict","key_type":"String","value_type":"Struct","value":["#,
                r#"{"key":{"param_type":"String","value":"史莱姆"},"#,
                r#""value":{"param_type":"Struct","value":{"structId":"42","type":"Struct","value":["#,
                r#"{"param_type":"EntityReference","value":"7"},"#,
                r#"{"param_type":"Int32","value":"5"}]}}}],"#,
                r#""value_structId":"42"}"#
            )
        );
    }

    #[test]
    fn test_struct_list_has_no_type_field() {
        let list = Param::struct_list("9", vec![Param::structure("9", vec![Param::string("a")])]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["param_type"], "StructList");
        assert_eq!(json["value"]["structId"], "9");
        assert!(json["value"].get("type").is_none());
        assert_eq!(json["value"]["value"][0]["value"]["type"], "Struct");
    }
}
