//! API documentation endpoints: an OpenAPI document and two HTML viewers.

use serde_json::{json, Value};

use crate::validation::{CONTENT_FIELD, EMAIL_FIELD, MAX_CONTENT_CHARS, MIN_CONTENT_CHARS};

pub const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
<title>Feedback Management API - Swagger UI</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
</script>
</body>
</html>
"##;

pub const REDOC_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Feedback Management API - ReDoc</title>
<meta charset="utf-8"/>
</head>
<body>
<redoc spec-url="/openapi.json"></redoc>
<script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;

/// Build the OpenAPI 3.1 description of the HTTP surface.
pub fn openapi_document() -> Value {
    let uuid_param = json!({
        "name": "feedback_uuid",
        "in": "path",
        "required": true,
        "schema": { "type": "string", "format": "uuid" }
    });
    let error_response = |description: &str| {
        json!({
            "description": description,
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ApiError" } } }
        })
    };
    let feedback_response = |description: &str| {
        json!({
            "description": description,
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Feedback" } } }
        })
    };

    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Feedback Management API",
            "description": "A RESTful API for managing user feedback with CRUD operations",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": {
                "get": {
                    "tags": ["General"],
                    "summary": "Root endpoint",
                    "responses": { "200": { "description": "Welcome message and API information" } }
                }
            },
            "/feedbacks": {
                "get": {
                    "tags": ["Feedbacks"],
                    "summary": "Get all feedbacks",
                    "responses": {
                        "200": {
                            "description": "All stored feedbacks",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Feedback" }
                            } } }
                        }
                    }
                },
                "post": {
                    "tags": ["Feedbacks"],
                    "summary": "Create new feedback",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/FeedbackCreate" } } }
                    },
                    "responses": {
                        "201": feedback_response("Created feedback"),
                        "400": error_response("Validation error")
                    }
                }
            },
            "/feedbacks/{feedback_uuid}": {
                "get": {
                    "tags": ["Feedbacks"],
                    "summary": "Get feedback by UUID",
                    "parameters": [uuid_param.clone()],
                    "responses": {
                        "200": feedback_response("The feedback"),
                        "404": error_response("Feedback not found")
                    }
                },
                "put": {
                    "tags": ["Feedbacks"],
                    "summary": "Update feedback",
                    "parameters": [uuid_param.clone()],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/FeedbackUpdate" } } }
                    },
                    "responses": {
                        "200": feedback_response("Updated feedback"),
                        "400": error_response("Validation error or empty update"),
                        "404": error_response("Feedback not found")
                    }
                },
                "delete": {
                    "tags": ["Feedbacks"],
                    "summary": "Delete feedback",
                    "parameters": [uuid_param],
                    "responses": {
                        "204": { "description": "Deleted" },
                        "404": error_response("Feedback not found")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Feedback": {
                    "type": "object",
                    "required": ["uuid", CONTENT_FIELD, EMAIL_FIELD],
                    "properties": {
                        "uuid": { "type": "string", "format": "uuid" },
                        CONTENT_FIELD: content_schema(),
                        EMAIL_FIELD: { "type": "string", "format": "email" }
                    }
                },
                "FeedbackCreate": {
                    "type": "object",
                    "required": [CONTENT_FIELD, EMAIL_FIELD],
                    "properties": {
                        CONTENT_FIELD: content_schema(),
                        EMAIL_FIELD: { "type": "string", "format": "email" }
                    }
                },
                "FeedbackUpdate": {
                    "type": "object",
                    "minProperties": 1,
                    "properties": {
                        CONTENT_FIELD: content_schema(),
                        EMAIL_FIELD: { "type": "string", "format": "email" }
                    }
                },
                "ApiError": {
                    "type": "object",
                    "required": ["code", "message", "status"],
                    "properties": {
                        "code": { "type": "string" },
                        "message": { "type": "string" },
                        "status": { "type": "integer" },
                        "field": { "type": "string" }
                    }
                }
            }
        }
    })
}

fn content_schema() -> Value {
    json!({
        "type": "string",
        "minLength": MIN_CONTENT_CHARS,
        "maxLength": MAX_CONTENT_CHARS
    })
}
