use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One indexed record as returned by the document listing.
#[derive(Getters, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "docId")]
    name: String,
    #[serde(default)]
    rank: Option<i64>,
    #[serde(default)]
    fields: BTreeMap<String, Field>,
}

impl Document {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }
}

#[derive(Getters, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    values: Vec<StringValue>,
}

/// A string-typed field value with its formatting and language metadata.
#[derive(Getters, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringValue {
    string_value: String,
    #[serde(default)]
    string_format: Option<String>,
    #[serde(default, rename = "lang")]
    language: Option<String>,
}

/// Body of a `documents` listing response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}
