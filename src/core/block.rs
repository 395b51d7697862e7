use crate::core::api::{filter_defined_params, ApiRequest, ApiResponse, LaunchDarklyClient, NullPolicy};
use crate::core::path::PathTemplate;
use crate::domain::model::{ContentType, FieldLocation, HttpMethod, InputField};
use crate::utils::error::{BlockError, Result};
use serde_json::{json, Map, Value};

/// 單一 LaunchDarkly 端點的宣告：方法、路徑模板、輸入欄位與輸出 schema
#[derive(Debug, Clone)]
pub struct BlockDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub method: HttpMethod,
    pub path: PathTemplate,
    pub inputs: Vec<InputField>,
    pub output_schema: Value,
    pub content_type: ContentType,
    pub beta: bool,
    /// 設定時，請求 body 就是此欄位的值（例如 JSON Patch 陣列）
    pub body_field: Option<String>,
}

impl BlockDefinition {
    /// 建立 block；路徑模板中的參數會自動宣告為必填的路徑欄位
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        method: HttpMethod,
        path: impl Into<String>,
    ) -> Self {
        let path = PathTemplate::parse(path);
        let inputs = path.params().iter().map(InputField::path).collect();

        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            description: String::new(),
            method,
            path,
            inputs,
            output_schema: json!({ "type": "object" }),
            content_type: ContentType::Json,
            beta: false,
            body_field: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 加入輸入欄位；同名欄位（例如補上說明的路徑參數）會被取代
    pub fn input(mut self, field: InputField) -> Self {
        if let Some(existing) = self.inputs.iter_mut().find(|f| f.name == field.name) {
            *existing = field;
        } else {
            self.inputs.push(field);
        }
        self
    }

    pub fn inputs(self, fields: impl IntoIterator<Item = InputField>) -> Self {
        fields.into_iter().fold(self, |block, field| block.input(field))
    }

    /// 整個 body 取自單一欄位，而不是由多個欄位組成物件
    pub fn body_from(mut self, field: InputField) -> Self {
        self.body_field = Some(field.name.clone());
        self.input(InputField {
            location: FieldLocation::Body,
            ..field
        })
    }

    pub fn output(mut self, schema: Value) -> Self {
        self.output_schema = schema;
        self
    }

    pub fn semantic_patch(mut self) -> Self {
        self.content_type = ContentType::SemanticPatch;
        self
    }

    pub fn beta(mut self) -> Self {
        self.beta = true;
        self
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.inputs.iter().find(|f| f.name == name)
    }

    fn fields_at(&self, location: FieldLocation) -> impl Iterator<Item = &InputField> {
        self.inputs.iter().filter(move |f| f.location == location)
    }

    pub fn has_body(&self) -> bool {
        self.fields_at(FieldLocation::Body).next().is_some()
    }

    /// 由輸入欄位產生 JSON Schema
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in &self.inputs {
            let mut property = Map::new();
            if let Some(json_type) = field.kind.json_type() {
                property.insert("type".to_string(), json!(json_type));
            }
            if !field.description.is_empty() {
                property.insert("description".to_string(), json!(field.description));
            }
            property.insert("x-location".to_string(), json!(field.location));
            properties.insert(field.name.clone(), Value::Object(property));

            if field.required {
                required.push(json!(field.name));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// 檢查必填欄位與型別
    pub fn validate_inputs(&self, inputs: &Map<String, Value>) -> Result<()> {
        for field in &self.inputs {
            match inputs.get(&field.name) {
                None | Some(Value::Null) if field.required => {
                    return Err(BlockError::MissingFieldError {
                        block: self.id.clone(),
                        field: field.name.clone(),
                    });
                }
                None | Some(Value::Null) => {}
                // 路徑參數的型別在 render 時檢查
                Some(_) if field.location == FieldLocation::Path => {}
                Some(value) if !field.kind.matches(value) => {
                    return Err(BlockError::InvalidFieldError {
                        field: field.name.clone(),
                        reason: format!(
                            "expected {}, got {}",
                            field.kind.json_type().unwrap_or("any"),
                            json_type_name(value)
                        ),
                    });
                }
                Some(_) => {}
            }
        }

        for name in inputs.keys() {
            if self.field(name).is_none() {
                tracing::debug!("Block '{}' ignores undeclared input '{}'", self.id, name);
            }
        }

        Ok(())
    }

    /// 把輸入轉成 API 請求（尚未送出）
    pub fn prepare(&self, inputs: &Map<String, Value>, null_policy: NullPolicy) -> Result<ApiRequest> {
        self.validate_inputs(inputs)?;

        let path = self.path.render(&self.id, inputs)?;

        let query = self
            .fields_at(FieldLocation::Query)
            .filter_map(|field| {
                inputs
                    .get(&field.name)
                    .and_then(query_value)
                    .map(|value| (field.name.clone(), value))
            })
            .collect();

        let body = if let Some(name) = &self.body_field {
            match (inputs.get(name), null_policy) {
                (None, _) | (Some(Value::Null), NullPolicy::Strip) => None,
                (Some(value), _) => Some(value.clone()),
            }
        } else if self.has_body() {
            let params = self
                .fields_at(FieldLocation::Body)
                .map(|field| (field.name.as_str(), inputs.get(&field.name)));
            Some(Value::Object(filter_defined_params(params, null_policy)))
        } else {
            None
        };

        Ok(ApiRequest {
            method: self.method,
            path,
            query,
            body,
            content_type: self.content_type,
            beta: self.beta,
        })
    }

    pub async fn execute(
        &self,
        client: &LaunchDarklyClient,
        inputs: &Map<String, Value>,
        null_policy: NullPolicy,
    ) -> Result<ApiResponse> {
        let request = self.prepare(inputs, null_policy)?;
        tracing::info!("▶️ {}: {} {}", self.id, self.method, request.path);
        client.send(&request).await
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
