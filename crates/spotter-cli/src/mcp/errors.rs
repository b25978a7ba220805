//! Error handling utilities for MCP server

use rmcp::ErrorData;
use spotter_core::CaseloadError;

/// Helper to convert caseload errors to MCP errors
///
/// Caller mistakes (bad parameters, unknown purchase IDs) map to invalid
/// params so clients can correct and retry; everything else is reported as
/// an internal error.
pub fn to_mcp_error(message: &str, error: &CaseloadError) -> ErrorData {
    match error {
        CaseloadError::InvalidInput { .. } | CaseloadError::PurchaseNotFound { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_caller_mistakes_map_to_invalid_params() {
        let error = CaseloadError::PurchaseNotFound {
            id: "pur_404".to_string(),
        };

        let mapped = to_mcp_error("Failed to get purchase", &error);
        assert_eq!(mapped.code, ErrorCode::INVALID_PARAMS);
        assert!(mapped.message.contains("pur_404"));
    }

    #[test]
    fn test_other_errors_map_to_internal_error() {
        let error = CaseloadError::Configuration {
            message: "bad state".to_string(),
        };

        let mapped = to_mcp_error("Failed to load caseload", &error);
        assert_eq!(mapped.code, ErrorCode::INTERNAL_ERROR);
    }
}
