//! Module: response::envelope
//! Responsibility: the uniform response payload shapes.
//! Does not own: HTTP transport, status-line emission, or routing.
//!
//! Serialized verbatim to the wire shape
//! `{status, message, client, data|description|details, links?}`.
//! Constructed once per request outcome; never mutated afterwards.

use crate::response::links::Links;
use crate::validate::{ChoiceOutcome, ValidationOutcome};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

///
/// Audience
///
/// Who a response message is written for. Developer-facing envelopes
/// carry diagnostic detail; user-facing ones stay presentable.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Developer,
    User,
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Developer => "developer",
            Self::User => "user",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Error,
    Warning,
}

///
/// SuccessResponse
///

#[derive(Clone, Debug, Serialize)]
pub struct SuccessResponse {
    pub status: u16,
    pub message: String,
    pub client: Audience,
    pub data: Option<Value>,
    pub links: Option<Links>,
}

impl SuccessResponse {
    /// 200 envelope for list/details payloads.
    #[must_use]
    pub fn ok(message: impl Into<String>, data: Value, links: Option<Links>) -> Self {
        Self {
            status: 200,
            message: message.into(),
            client: Audience::User,
            data: Some(data),
            links,
        }
    }

    /// 201 envelope for a successful creation.
    #[must_use]
    pub fn created(record: &str, data: Value, links: Option<Links>) -> Self {
        Self {
            status: 201,
            message: format!("{record} Created Successfully"),
            client: Audience::User,
            data: Some(data),
            links,
        }
    }
}

///
/// UpdateResponse
///

#[derive(Clone, Debug, Serialize)]
pub struct UpdateResponse {
    pub status: u16,
    pub message: String,
    pub client: Audience,
    pub details: Option<Value>,
    pub links: Option<Links>,
}

impl UpdateResponse {
    /// 200 envelope confirming which fields an update touched.
    #[must_use]
    pub fn updated(record: &str, fields: &[String], links: Option<Links>) -> Self {
        Self {
            status: 200,
            message: format!("{record} Updated Successfully"),
            client: Audience::User,
            details: Some(json!({
                "info": "following fields are updated",
                "fields": fields,
            })),
            links,
        }
    }
}

///
/// ErrorResponse
///

#[derive(Clone, Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
    pub client: Audience,
    pub description: Option<Value>,
}

impl ErrorResponse {
    /// 400 warning envelope with a structured description.
    #[must_use]
    pub fn warning(message: impl Into<String>, description: Value) -> Self {
        Self {
            status: 400,
            kind: ErrorKind::Warning,
            message: message.into(),
            client: Audience::Developer,
            description: Some(description),
        }
    }

    /// Payload carried keys that are not declared fields of the record.
    #[must_use]
    pub fn invalid_request_fields(record: &str, invalid: &[String]) -> Self {
        Self::warning(
            "Invalid field names in request data",
            json!({
                "invalid_fields": invalid,
                "info": format!("Some field names are not valid for the {record}"),
            }),
        )
    }

    /// Query string carried keys outside the action's allow-list.
    #[must_use]
    pub fn invalid_query_params(outcome: &ValidationOutcome) -> Self {
        Self::warning(
            "Invalid query parameters",
            json!({
                "invalid_params": outcome.invalid,
                "allowed_params": outcome.allowed,
                "info": "Remove the invalid query parameters and retry",
            }),
        )
    }

    /// An enumerated field was set to a value outside its choice set.
    #[must_use]
    pub fn invalid_choice(field: &str, outcome: &ChoiceOutcome) -> Self {
        let mut description = serde_json::Map::new();
        description.insert(
            field.to_string(),
            json!(format!("Must be one of {}", outcome.members.join(", "))),
        );
        description.insert(
            "info".to_string(),
            json!(format!("Select {field} from the listed choices")),
        );

        Self::warning(format!("Invalid {field}"), Value::Object(description))
    }

    /// Required fields were missing or blank in the payload.
    #[must_use]
    pub fn required_fields(record: &str, missing: &[String], empty: &[String]) -> Self {
        Self::warning(
            format!("Required fields missing for {record}"),
            json!({
                "missing_fields": missing,
                "empty_fields": empty,
                "info": format!("Provide every required field to create a {record}"),
            }),
        )
    }

    /// A mutating request arrived with no payload at all. `expected`
    /// documents the accepted fields for the developer.
    #[must_use]
    pub fn empty_payload(expected: Value) -> Self {
        Self::warning("No Data Provided, Please provide payload data", expected)
    }

    /// 500 envelope for truly unhandled failures. No raw exception text
    /// reaches users anywhere else.
    #[must_use]
    pub fn unexpected(error: impl Into<String>) -> Self {
        Self {
            status: 500,
            kind: ErrorKind::Error,
            message: "An unexpected error occurred while processing your request".to_string(),
            client: Audience::Developer,
            description: Some(json!({
                "error": error.into(),
                "message": "Please contact support, we will get back to you soon",
            })),
        }
    }
}

///
/// NotFoundResponse
///

#[derive(Clone, Debug, Serialize)]
pub struct NotFoundResponse {
    pub status: u16,
    pub message: String,
    pub client: Audience,
    pub description: Option<Value>,
}

impl NotFoundResponse {
    /// A record lookup missed. Detection is the caller's job; only the
    /// envelope shape lives here.
    #[must_use]
    pub fn record(record: &str, id: &str) -> Self {
        Self {
            status: 404,
            message: format!("{record} Not Found"),
            client: Audience::User,
            description: Some(json!({
                "info": format!("No {record} matches id '{id}'"),
            })),
        }
    }

    /// The request path itself resolved to nothing.
    #[must_use]
    pub fn url(path: &str) -> Self {
        Self {
            status: 404,
            message: "404 Page Not Found".to_string(),
            client: Audience::User,
            description: Some(json!({
                "info": format!("'{path}' is not a valid url"),
            })),
        }
    }
}

///
/// NoContentResponse
///
/// Deletion confirmation. The canonical 204 is carried in `status` for
/// documentation, but the envelope goes on the wire with an explicit
/// 200 and a body: many HTTP client libraries suppress bodies on a
/// literal 204 response.
///

#[derive(Clone, Debug, Serialize)]
pub struct NoContentResponse {
    pub status: u16,
    pub alternate_status: u16,
    pub message: String,
    pub client: Audience,
    pub description: Option<Value>,
}

impl NoContentResponse {
    #[must_use]
    pub fn deleted(record: &str, id: &str) -> Self {
        Self {
            status: 204,
            alternate_status: 200,
            message: "Resource deleted successfully".to_string(),
            client: Audience::User,
            description: Some(json!({
                "info": format!("{record} '{id}' has been deleted"),
            })),
        }
    }

    /// Status to put on the wire (see type docs).
    #[must_use]
    pub const fn wire_status(&self) -> u16 {
        self.alternate_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::links::response_links;
    use serde_json::to_value;

    #[test]
    fn success_envelope_matches_the_wire_shape() {
        let envelope = SuccessResponse::created(
            "Brand",
            json!({ "id": 1, "brand_name": "Care-Box" }),
            Some(response_links("create", "brand")),
        );

        assert_eq!(
            to_value(&envelope).expect("envelope serializes"),
            json!({
                "status": 201,
                "message": "Brand Created Successfully",
                "client": "user",
                "data": { "id": 1, "brand_name": "Care-Box" },
                "links": {
                    "update": "/brand/update/id/",
                    "list": "/brand/list/",
                    "details": "/brand/details/id/",
                    "delete": "/brand/delete/id/",
                },
            })
        );
    }

    #[test]
    fn error_envelope_serializes_kind_under_type() {
        let envelope = ErrorResponse::invalid_request_fields(
            "Brand",
            &["brand_colour".to_string()],
        );

        assert_eq!(
            to_value(&envelope).expect("envelope serializes"),
            json!({
                "status": 400,
                "type": "warning",
                "message": "Invalid field names in request data",
                "client": "developer",
                "description": {
                    "invalid_fields": ["brand_colour"],
                    "info": "Some field names are not valid for the Brand",
                },
            })
        );
    }

    #[test]
    fn unexpected_envelope_is_developer_facing_500() {
        let envelope = ErrorResponse::unexpected("connection pool exhausted");

        assert_eq!(envelope.status, 500);
        assert_eq!(envelope.kind, ErrorKind::Error);
        assert_eq!(envelope.client, Audience::Developer);
    }

    #[test]
    fn required_fields_envelope_separates_missing_from_empty() {
        let envelope = ErrorResponse::required_fields(
            "Brand",
            &["brand_name".to_string()],
            &["description".to_string()],
        );

        let value = to_value(&envelope).expect("envelope serializes");
        assert_eq!(value["description"]["missing_fields"], json!(["brand_name"]));
        assert_eq!(value["description"]["empty_fields"], json!(["description"]));
    }

    #[test]
    fn empty_payload_envelope_documents_the_expected_fields() {
        let envelope = ErrorResponse::empty_payload(json!({
            "brand_name": "str, this field is required",
            "active_status": "choice, optional, default='active'",
        }));

        assert_eq!(envelope.status, 400);
        assert_eq!(
            envelope.message,
            "No Data Provided, Please provide payload data"
        );
    }

    #[test]
    fn url_not_found_envelope_echoes_the_path() {
        let envelope = NotFoundResponse::url("/brand/listt/");

        let value = to_value(&envelope).expect("envelope serializes");
        assert_eq!(value["message"], "404 Page Not Found");
        assert_eq!(value["description"]["info"], "'/brand/listt/' is not a valid url");
    }

    #[test]
    fn not_found_envelope_names_the_record() {
        let envelope = NotFoundResponse::record("Brand", "42");

        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.message, "Brand Not Found");
    }

    #[test]
    fn no_content_goes_on_the_wire_as_200_with_body() {
        let envelope = NoContentResponse::deleted("Brand", "42");

        assert_eq!(envelope.status, 204);
        assert_eq!(envelope.wire_status(), 200);

        let value = to_value(&envelope).expect("envelope serializes");
        assert_eq!(value["alternate_status"], 200);
        assert_eq!(value["message"], "Resource deleted successfully");
    }

    #[test]
    fn update_envelope_lists_the_touched_fields() {
        let envelope = UpdateResponse::updated(
            "Brand",
            &["brand_name".to_string(), "web_url".to_string()],
            None,
        );

        let value = to_value(&envelope).expect("envelope serializes");
        assert_eq!(value["details"]["fields"], json!(["brand_name", "web_url"]));
        assert_eq!(value["links"], Value::Null);
    }
}
