//! Error handling utilities for MCP server

use rmcp::ErrorData;
use taskbreaker_core::PlannerError;

/// Converts a planner error into an MCP error.
///
/// Errors caused by the request itself (unknown or foreign task, bad input)
/// become `invalid_params`; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_client_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
