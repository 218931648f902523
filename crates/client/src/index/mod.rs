//! Index resources
//!
//! An [`Index`] mirrors the server's index record. Its identity is fixed at
//! construction and its field-schema metadata is only ever filled in from a
//! complete resource record, so the struct exposes no setters.

mod list;

pub use list::*;

use {
    crate::{Client, SearchClientError, SearchResult},
    derive_getters::Getters,
    serde::{Deserialize, Serialize},
    serde_json::Value,
    std::fmt::{Debug, Formatter},
};

/// Index record as returned by the API.
///
/// `index_id` is optional here so a record without it can be reported as a
/// missing field rather than a generic deserialization failure.
#[derive(Getters, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResource {
    index_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    indexed_field: Option<IndexedFields>,
}

/// Field names declared for each field type. `None` means the server did not
/// report that type at all, which is not the same as reporting it empty.
#[derive(Getters, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedFields {
    text_fields: Option<Vec<String>>,
    html_fields: Option<Vec<String>>,
    atom_fields: Option<Vec<String>>,
    date_fields: Option<Vec<String>>,
    number_fields: Option<Vec<String>>,
    geo_fields: Option<Vec<String>>,
}

pub struct Index<'a, C: Client + ?Sized> {
    name: String,
    client: &'a C,
    fields: IndexedFields,
}

impl<'a, C: Client + ?Sized> Index<'a, C> {
    pub fn new(name: impl Into<String>, client: &'a C) -> Self {
        Self {
            name: name.into(),
            client,
            fields: IndexedFields::default(),
        }
    }

    /// Builds an index from a resource record.
    ///
    /// Fails with [`SearchClientError::MissingField`] when `indexId` is absent
    /// or null, whatever else the record carries.
    pub fn from_api_repr(resource: &Value, client: &'a C) -> SearchResult<Self> {
        let resource = IndexResource::deserialize(resource)?;

        let name = resource
            .index_id
            .ok_or(SearchClientError::MissingField("indexId"))?;

        Ok(Self {
            name,
            client,
            fields: resource.indexed_field.unwrap_or_default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client(&self) -> &'a C {
        self.client
    }

    pub fn project(&self) -> &'a str {
        self.client.project()
    }

    /// `/projects/{project}/indexes/{name}`
    pub fn path(&self) -> String {
        format!("/projects/{}/indexes/{}", self.project(), self.name)
    }

    pub fn indexed_fields(&self) -> &IndexedFields {
        &self.fields
    }

    pub fn text_fields(&self) -> Option<&[String]> {
        self.fields.text_fields.as_deref()
    }

    pub fn html_fields(&self) -> Option<&[String]> {
        self.fields.html_fields.as_deref()
    }

    pub fn atom_fields(&self) -> Option<&[String]> {
        self.fields.atom_fields.as_deref()
    }

    pub fn date_fields(&self) -> Option<&[String]> {
        self.fields.date_fields.as_deref()
    }

    pub fn number_fields(&self) -> Option<&[String]> {
        self.fields.number_fields.as_deref()
    }

    pub fn geo_fields(&self) -> Option<&[String]> {
        self.fields.geo_fields.as_deref()
    }
}

impl<'a, C: Client + ?Sized> Debug for Index<'a, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("name", &self.name)
            .field("project", &self.project())
            .field("fields", &self.fields)
            .finish()
    }
}
