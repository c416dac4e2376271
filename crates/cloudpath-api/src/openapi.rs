// SPDX-License-Identifier: Apache-2.0

use crate::ApiErrorCode;
use serde_json::{json, Value};

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}
    })
}

fn ok_response(description: &str, schema: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": {"$ref": format!("#/components/schemas/{schema}")}}}
    })
}

fn not_modified() -> Value {
    json!({"description": "dataset unchanged since the ETag sent in If-None-Match"})
}

fn id_param() -> Value {
    json!({"name": "id", "in": "path", "required": true, "schema": {"type": "string", "maxLength": cloudpath_model::ID_MAX_LEN}})
}

fn filter_params() -> Value {
    json!([
        {"name": "provider", "in": "query", "schema": {"type": "string", "description": "comma-separated providers: AWS, Azure, GCP"}},
        {"name": "level", "in": "query", "schema": {"type": "string", "description": "comma-separated levels"}},
        {"name": "code", "in": "query", "schema": {"type": "string", "description": "exam code substring; hyphens and case ignored"}}
    ])
}

fn record_list_schema() -> Value {
    json!({"type": "array", "items": {"$ref": "#/components/schemas/CertificationRecord"}})
}

#[must_use]
pub fn openapi_v1_spec() -> Value {
    let error_codes: Vec<&str> = ApiErrorCode::ALL.iter().map(|c| c.as_str()).collect();
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "CloudPath API",
        "version": "v1"
      },
      "paths": {
        "/healthz": {"get": {"responses": {"200": {"description": "ok"}}}},
        "/readyz": {
          "get": {
            "responses": {
              "200": {"description": "record set loaded"},
              "503": error_response("record set not loaded")
            }
          }
        },
        "/v1/openapi.json": {"get": {"responses": {"200": {"description": "this document"}}}},
        "/v1/version": {"get": {"responses": {"200": ok_response("service and dataset version", "Version")}}},
        "/v1/providers": {
          "get": {
            "responses": {
              "200": ok_response("certification count per provider", "Providers"),
              "304": not_modified(),
              "503": error_response("record set not loaded")
            }
          }
        },
        "/v1/certifications": {
          "get": {
            "parameters": filter_params(),
            "responses": {
              "200": ok_response("filtered certification list", "CertificationList"),
              "304": not_modified(),
              "400": error_response("invalid filter"),
              "503": error_response("record set not loaded")
            }
          }
        },
        "/v1/certifications/{id}": {
          "get": {
            "parameters": [id_param()],
            "responses": {
              "200": ok_response("certification with resolved learning path", "CertificationDetail"),
              "304": not_modified(),
              "404": error_response("unknown certification id"),
              "503": error_response("record set not loaded")
            }
          }
        },
        "/v1/certifications/{id}/relations": {
          "get": {
            "parameters": [id_param()],
            "responses": {
              "200": ok_response("relation of every record to the focus", "Relations"),
              "304": not_modified(),
              "404": error_response("unknown certification id"),
              "503": error_response("record set not loaded")
            }
          }
        },
        "/v1/explorer": {
          "get": {
            "parameters": filter_params(),
            "responses": {
              "200": ok_response("filtered records bucketed by level", "Explorer"),
              "304": not_modified(),
              "400": error_response("invalid filter"),
              "503": error_response("record set not loaded")
            }
          }
        },
        "/v1/compare": {
          "get": {
            "parameters": [
              {"name": "left", "in": "query", "required": true, "schema": {"type": "string"}},
              {"name": "right", "in": "query", "required": true, "schema": {"type": "string"}}
            ],
            "responses": {
              "200": ok_response("pairwise comparison", "Comparison"),
              "304": not_modified(),
              "400": error_response("missing or identical ids"),
              "404": error_response("unknown certification id"),
              "503": error_response("record set not loaded")
            }
          }
        },
        "/v1/compare/batch": {
          "get": {
            "parameters": [
              {"name": "ids", "in": "query", "required": true, "schema": {"type": "string", "description": "2 to 3 comma-separated ids"}}
            ],
            "responses": {
              "200": ok_response("every unordered pair in input order", "BatchComparison"),
              "304": not_modified(),
              "400": error_response("wrong id count or duplicate ids"),
              "404": error_response("unknown certification id"),
              "503": error_response("record set not loaded")
            }
          }
        },
        "/v1/compare/options": {
          "get": {
            "responses": {
              "200": ok_response("compare picker groups ordered by difficulty", "CompareOptions"),
              "304": not_modified(),
              "503": error_response("record set not loaded")
            }
          }
        }
      },
      "components": {
        "schemas": {
          "ApiErrorCode": {
            "type": "string",
            "enum": error_codes
          },
          "ApiError": {
            "type": "object",
            "required": ["code", "message", "details", "request_id"],
            "additionalProperties": false,
            "properties": {
              "code": {"$ref": "#/components/schemas/ApiErrorCode"},
              "message": {"type": "string"},
              "details": {"type": "object", "additionalProperties": true},
              "request_id": {"type": "string"}
            },
            "examples": {
              "notFound": {
                "value": {
                  "code": "CertificationNotFound",
                  "message": "certification not found: az-999",
                  "details": {"id": "az-999"},
                  "request_id": "req-0000000000000001"
                }
              }
            }
          },
          "CertificationRecord": {
            "type": "object",
            "required": ["id", "provider", "level"],
            "properties": {
              "id": {"type": "string"},
              "name": {"type": "string"},
              "examCode": {"type": "string"},
              "provider": {"type": "string", "enum": ["AWS", "Azure", "GCP"]},
              "level": {"type": "string", "enum": ["Fundamental", "Associate", "Professional", "Expert", "Specialty"]},
              "description": {"type": "string"},
              "role": {"type": "array", "items": {"type": "string"}},
              "domains": {"type": "array", "items": {"type": "string"}},
              "prerequisites": {"type": "array", "items": {"type": "string"}},
              "leadsTo": {"type": "array", "items": {"type": "string"}},
              "cost": {"type": "integer", "minimum": 0},
              "durationHours": {"type": "integer", "minimum": 0},
              "difficulty": {"type": "string", "enum": ["Beginner", "Intermediate", "Advanced"]},
              "passScorePercent": {"type": "integer", "minimum": 0, "maximum": 100},
              "validityYears": {"type": "integer", "minimum": 0},
              "officialLink": {"type": "string"},
              "resources": {"type": "object"}
            }
          },
          "CertificationList": {
            "type": "object",
            "required": ["count", "certifications"],
            "properties": {"count": {"type": "integer"}, "certifications": record_list_schema()}
          },
          "CertRef": {
            "type": "object",
            "required": ["id", "record"],
            "properties": {
              "id": {"type": "string"},
              "record": {"allOf": [{"$ref": "#/components/schemas/CertificationRecord"}], "nullable": true}
            }
          },
          "CertificationDetail": {
            "type": "object",
            "required": ["certification", "prerequisites", "successors"],
            "properties": {
              "certification": {"$ref": "#/components/schemas/CertificationRecord"},
              "prerequisites": {"type": "array", "items": {"$ref": "#/components/schemas/CertRef"}},
              "successors": {"type": "array", "items": {"$ref": "#/components/schemas/CertRef"}}
            }
          },
          "Relations": {
            "type": "object",
            "required": ["focus", "relations"],
            "properties": {
              "focus": {"type": "string"},
              "relations": {
                "type": "array",
                "items": {
                  "type": "object",
                  "required": ["id", "relation", "emphasized", "dimmed"],
                  "properties": {
                    "id": {"type": "string"},
                    "relation": {"type": "string", "enum": ["self", "prerequisite", "successor", "unrelated"]},
                    "emphasized": {"type": "boolean"},
                    "dimmed": {"type": "boolean"}
                  }
                }
              }
            }
          },
          "Explorer": {
            "type": "object",
            "required": ["count", "buckets"],
            "properties": {
              "count": {"type": "integer"},
              "buckets": {
                "type": "array",
                "items": {
                  "type": "object",
                  "required": ["level", "certifications"],
                  "properties": {"level": {"type": "string"}, "certifications": record_list_schema()}
                }
              }
            }
          },
          "ComparisonSummary": {
            "type": "object",
            "required": ["levelDifference", "roleOverlapPercent", "domainOverlapPercent", "costDelta", "durationDelta"],
            "properties": {
              "levelDifference": {"type": "integer"},
              "roleOverlapPercent": {"type": "number", "minimum": 0, "maximum": 100},
              "domainOverlapPercent": {"type": "number", "minimum": 0, "maximum": 100},
              "costDelta": {"type": "integer"},
              "durationDelta": {"type": "integer"}
            }
          },
          "Comparison": {
            "type": "object",
            "required": ["left", "right", "summary"],
            "properties": {
              "left": {"$ref": "#/components/schemas/CertificationRecord"},
              "right": {"$ref": "#/components/schemas/CertificationRecord"},
              "summary": {"$ref": "#/components/schemas/ComparisonSummary"}
            }
          },
          "BatchComparison": {
            "type": "object",
            "required": ["comparisons"],
            "properties": {"comparisons": {"type": "array", "items": {"$ref": "#/components/schemas/Comparison"}}}
          },
          "CompareOptions": {
            "type": "object",
            "required": ["groups"],
            "properties": {
              "groups": {
                "type": "array",
                "items": {
                  "type": "object",
                  "required": ["provider", "certifications"],
                  "properties": {"provider": {"type": "string"}, "certifications": record_list_schema()}
                }
              }
            }
          },
          "Providers": {
            "type": "object",
            "required": ["providers"],
            "properties": {
              "providers": {
                "type": "array",
                "items": {
                  "type": "object",
                  "required": ["provider", "display_name", "count"],
                  "properties": {"provider": {"type": "string"}, "display_name": {"type": "string"}, "count": {"type": "integer"}}
                }
              }
            }
          },
          "Version": {
            "type": "object",
            "required": ["service", "version", "api_version", "dataset_digest", "record_count"],
            "properties": {
              "service": {"type": "string"},
              "version": {"type": "string"},
              "api_version": {"type": "string"},
              "dataset_digest": {"type": "string", "nullable": true},
              "record_count": {"type": "integer"}
            }
          }
        }
      }
    })
}

/// Every `$ref` target named in the document.
#[must_use]
pub fn referenced_schemas(spec: &Value) -> Vec<String> {
    let mut out = Vec::new();
    collect_refs(spec, &mut out);
    out.sort();
    out.dedup();
    out
}

fn collect_refs(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key == "$ref" {
                    if let Some(name) = child
                        .as_str()
                        .and_then(|r| r.strip_prefix("#/components/schemas/"))
                    {
                        out.push(name.to_string());
                    }
                } else {
                    collect_refs(child, out);
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect_refs(item, out)),
        _ => {}
    }
}
