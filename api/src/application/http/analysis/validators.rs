use bloodlens_core::domain::reading::entities::Reading;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeDirectRequest {
    /// Item name to measured value, e.g. `{"ヘモグロビン": 12.0}`.
    #[schema(value_type = Object)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl AnalyzeDirectRequest {
    /// Entries in request order.
    pub fn into_readings(self) -> Vec<Reading> {
        self.data
            .into_iter()
            .map(|(item, value)| Reading::new(item, value))
            .collect()
    }
}

/// Multipart form accepted by the upload endpoint.
#[derive(Debug, ToSchema)]
pub struct UploadFileForm {
    /// `.csv`, `.png`, `.jpg`, `.jpeg` or `.pdf`.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloodlens_core::domain::reading::entities::RawValue;
    use serde_json::json;

    #[test]
    fn test_into_readings_keeps_request_order() {
        let request: AnalyzeDirectRequest = serde_json::from_value(json!({
            "data": { "ALT": 20, "ヘモグロビン": "12.5", "AST": 25.0 }
        }))
        .unwrap();

        let readings = request.into_readings();
        let items: Vec<&str> = readings.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(items, vec!["ALT", "ヘモグロビン", "AST"]);
        assert_eq!(readings[1].value, RawValue::Text("12.5".to_string()));
    }
}
