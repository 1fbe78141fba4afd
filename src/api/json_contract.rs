use serde::{Deserialize, Serialize};

use crate::core::{ChartData, ChartDocument, ChartOptions, ShapeTag};
use crate::error::{DocError, DocResult};

pub const CHART_DOCUMENT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for persisting a whole document pair in one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocumentJsonContractV1 {
    pub schema_version: u32,
    pub document: ChartDocument,
}

impl ChartData {
    pub fn to_json_string(&self) -> DocResult<String> {
        serde_json::to_string(self)
            .map_err(|e| DocError::InvalidPayload(format!("failed to serialize chart data: {e}")))
    }

    pub fn from_json_str(input: &str) -> DocResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DocError::InvalidPayload(format!("failed to parse chart data: {e}")))
    }
}

impl ChartOptions {
    pub fn to_json_string(&self) -> DocResult<String> {
        serde_json::to_string(self).map_err(|e| {
            DocError::InvalidPayload(format!("failed to serialize chart options: {e}"))
        })
    }

    /// Parses the bare options tree for a known shape. The shape tag travels
    /// separately in the host's attribute storage.
    pub fn from_json_str(shape: ShapeTag, input: &str) -> DocResult<Self> {
        let value = serde_json::from_str(input)
            .map_err(|e| DocError::InvalidPayload(format!("failed to parse chart options: {e}")))?;
        Self::from_value(shape, value)
    }
}

impl ChartDocument {
    pub fn to_json_contract_v1_pretty(&self) -> DocResult<String> {
        let payload = ChartDocumentJsonContractV1 {
            schema_version: CHART_DOCUMENT_JSON_SCHEMA_V1,
            document: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DocError::InvalidPayload(format!("failed to serialize document contract v1: {e}"))
        })
    }

    /// Accepts either a bare document or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> DocResult<Self> {
        if let Ok(document) = serde_json::from_str::<ChartDocument>(input) {
            return Ok(document);
        }
        let payload: ChartDocumentJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DocError::InvalidPayload(format!("failed to parse document json payload: {e}"))
        })?;
        if payload.schema_version != CHART_DOCUMENT_JSON_SCHEMA_V1 {
            return Err(DocError::UnsupportedSchemaVersion(payload.schema_version));
        }
        Ok(payload.document)
    }
}
