//! API request and response types
//!
//! The submit endpoint takes a form-encoded body and answers in plain text;
//! the result-type and parameter endpoints answer in XML. These types match
//! the service's own schema and are passed through without reinterpretation.

use serde::{Deserialize, Serialize};

/// Form body for a job submission.
///
/// The service expects repeated `appl` fields for the signature method
/// list, so the body is built as an ordered field list rather than a map.
#[derive(Debug, Clone, Default)]
pub struct RunForm {
    pub email: String,
    pub sequence: String,
    pub title: Option<String>,
    /// Include GO term annotations (service default applies when None)
    pub goterms: Option<bool>,
    /// Include pathway annotations (service default applies when None)
    pub pathways: Option<bool>,
    /// Signature methods to run; empty means the service's full set
    pub appl: Vec<String>,
}

impl RunForm {
    /// Flatten into form fields in the order the service documents them.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("email", self.email.clone()),
            ("sequence", self.sequence.clone()),
        ];

        if let Some(ref title) = self.title {
            fields.push(("title", title.clone()));
        }
        if let Some(goterms) = self.goterms {
            fields.push(("goterms", goterms.to_string()));
        }
        if let Some(pathways) = self.pathways {
            fields.push(("pathways", pathways.to_string()));
        }
        for appl in &self.appl {
            fields.push(("appl", appl.clone()));
        }

        fields
    }
}

/// Root element of the `result_types/{id}` XML document.
#[derive(Debug, Deserialize)]
#[serde(rename = "types")]
pub struct ResultTypeList {
    #[serde(rename = "type", default)]
    pub types: Vec<ResultType>,
}

/// One result representation offered by the service for a finished job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultType {
    pub identifier: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub file_suffix: Option<String>,
}

/// Root element of the `parameters` XML document.
#[derive(Debug, Deserialize)]
#[serde(rename = "parameters")]
pub struct ParameterList {
    #[serde(rename = "id", default)]
    pub ids: Vec<String>,
}

/// The `parameter_details/{name}` XML document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "parameter")]
pub struct ParameterDetail {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub values: Option<ParameterValues>,
}

/// Wrapper element for a parameter's value list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterValues {
    #[serde(rename = "value", default)]
    pub values: Vec<ParameterValue>,
}

/// One allowed value of a parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterValue {
    #[serde(default)]
    pub label: Option<String>,
    pub value: String,
    #[serde(rename = "defaultValue", default)]
    pub default_value: bool,
    #[serde(default)]
    pub properties: Option<ParameterProperties>,
}

/// Wrapper element for a value's property list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterProperties {
    #[serde(rename = "property", default)]
    pub properties: Vec<ParameterProperty>,
}

/// A key/value property attached to a parameter value.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterProperty {
    pub key: String,
    pub value: String,
}
