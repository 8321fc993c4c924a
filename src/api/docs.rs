//! API documentation endpoint
//!
//! Serves a machine-readable OpenAPI 3.0 description of the joke routes.
//! Purely descriptive; the behavioral contract lives in the handlers.

use axum::Json;
use serde_json::{json, Value};

/// GET /api/docs - OpenAPI document for the joke API
pub async fn api_docs() -> Json<Value> {
    Json(json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Joke Service API",
            "description": "Serves jokes from two external providers and a store of user-submitted jokes.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Liveness text",
                    "responses": {
                        "200": { "description": "Service is up" }
                    }
                }
            },
            "/joke": {
                "get": {
                    "summary": "Serve one joke from the requested source",
                    "parameters": [{
                        "name": "kind",
                        "in": "query",
                        "required": true,
                        "schema": { "type": "string", "enum": ["Chuck", "Dad", "Own"] }
                    }],
                    "responses": {
                        "200": { "description": "A joke", "content": { "application/json": { "schema": { "$ref": "#/components/schemas/JokeResponse" } } } },
                        "400": { "description": "Unknown or missing kind" },
                        "404": { "description": "No stored jokes available" },
                        "500": { "description": "Provider or storage failure" }
                    }
                },
                "post": {
                    "summary": "Store a new joke",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/NewJoke" } } }
                    },
                    "responses": {
                        "201": { "description": "Joke stored", "content": { "application/json": { "schema": { "$ref": "#/components/schemas/CreateJokeResponse" } } } },
                        "400": { "description": "Validation failure" }
                    }
                }
            },
            "/joke/{id}": {
                "put": {
                    "summary": "Partially update a stored joke",
                    "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }],
                    "requestBody": {
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/JokeUpdate" } } }
                    },
                    "responses": {
                        "200": { "description": "Joke updated" },
                        "400": { "description": "Validation failure" },
                        "404": { "description": "No joke with that ID" },
                        "500": { "description": "Storage failure" }
                    }
                },
                "delete": {
                    "summary": "Delete a stored joke",
                    "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }],
                    "responses": {
                        "200": { "description": "Joke deleted" },
                        "404": { "description": "No joke with that ID" },
                        "500": { "description": "Storage failure" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "JokeResponse": {
                    "type": "object",
                    "properties": { "joke": { "type": "string" } }
                },
                "CreateJokeResponse": {
                    "type": "object",
                    "properties": { "id": { "type": "string" } }
                },
                "NewJoke": {
                    "type": "object",
                    "required": ["text", "score", "category"],
                    "properties": {
                        "text": { "type": "string" },
                        "author": { "type": "string" },
                        "score": { "type": "integer", "minimum": 1, "maximum": 10 },
                        "category": { "type": "string", "enum": ["Dad joke", "Dark Humor", "Funny", "Bad"] }
                    }
                },
                "JokeUpdate": {
                    "type": "object",
                    "properties": {
                        "text": { "type": "string" },
                        "author": { "type": "string" },
                        "score": { "type": "integer", "minimum": 1, "maximum": 10 },
                        "category": { "type": "string", "enum": ["Dad joke", "Dark Humor", "Funny", "Bad"] }
                    }
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_docs_describe_all_public_routes() {
        let Json(doc) = api_docs().await;

        let paths = doc.get("paths").and_then(Value::as_object).unwrap();
        assert!(paths.contains_key("/"));
        assert!(paths.contains_key("/joke"));
        assert!(paths.contains_key("/joke/{id}"));

        let joke = paths.get("/joke").and_then(Value::as_object).unwrap();
        assert!(joke.contains_key("get"));
        assert!(joke.contains_key("post"));

        let joke_by_id = paths.get("/joke/{id}").and_then(Value::as_object).unwrap();
        assert!(joke_by_id.contains_key("put"));
        assert!(joke_by_id.contains_key("delete"));
    }
}
