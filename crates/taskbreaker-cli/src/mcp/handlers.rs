//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use taskbreaker_core::{params as core, Planner};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types are wrapped in a transparent serde container so the
// MCP layer owns its JSON handling while the core types stay framework-free.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

pub type GenerateTask = McpParams<core::GenerateTask>;
pub type ListTasks = McpParams<core::ListTasks>;
pub type TaskRef = McpParams<core::TaskRef>;
pub type UpdateSubtask = McpParams<core::UpdateSubtask>;
pub type UserRef = McpParams<core::UserRef>;
pub type SetPreferences = McpParams<core::SetPreferences>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
///
/// Every call runs as `user_id`, whatever the client sent.
pub struct McpHandlers {
    planner: Arc<Planner>,
    user_id: Arc<str>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>, user_id: Arc<str>) -> Self {
        Self { planner, user_id }
    }

    fn user(&self) -> String {
        self.user_id.to_string()
    }

    pub async fn generate_task(&self, Parameters(params): Parameters<GenerateTask>) -> McpResult {
        let params = core::GenerateTask {
            user_id: self.user(),
            ..params.into_inner()
        };
        debug!("generate_task: {params:?}");

        let result = self
            .planner
            .generate_task_result(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to generate task", &e))?;

        text_result(result.to_string())
    }

    pub async fn list_tasks(&self, Parameters(_): Parameters<ListTasks>) -> McpResult {
        let params = core::ListTasks {
            user_id: self.user(),
        };
        debug!("list_tasks: {params:?}");

        let tasks = self
            .planner
            .list_tasks(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to list tasks", &e))?;

        text_result(format!("# Tasks\n\n{tasks}"))
    }

    pub async fn show_task(&self, Parameters(params): Parameters<TaskRef>) -> McpResult {
        let params = core::TaskRef {
            user_id: self.user(),
            ..params.into_inner()
        };
        debug!("show_task: {params:?}");

        let task = self
            .planner
            .get_task(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to get task", &e))?;

        text_result(task.to_string())
    }

    pub async fn update_subtask(
        &self,
        Parameters(params): Parameters<UpdateSubtask>,
    ) -> McpResult {
        let params = core::UpdateSubtask {
            user_id: self.user(),
            ..params.into_inner()
        };
        debug!("update_subtask: {params:?}");

        let result = self
            .planner
            .update_subtask_result(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to update subtask", &e))?;

        text_result(result.to_string())
    }

    pub async fn delete_task(&self, Parameters(params): Parameters<TaskRef>) -> McpResult {
        let params = core::TaskRef {
            user_id: self.user(),
            ..params.into_inner()
        };
        debug!("delete_task: {params:?}");

        let result = self
            .planner
            .delete_task_result(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete task", &e))?;

        text_result(result.to_string())
    }

    pub async fn get_preferences(&self, Parameters(_): Parameters<UserRef>) -> McpResult {
        let params = core::UserRef {
            user_id: self.user(),
        };
        debug!("get_preferences: {params:?}");

        let preferences = self
            .planner
            .preferences(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to load preferences", &e))?;

        text_result(format!("# Preferences for {}\n\n{preferences}", self.user_id))
    }

    pub async fn set_preferences(
        &self,
        Parameters(params): Parameters<SetPreferences>,
    ) -> McpResult {
        let params = core::SetPreferences {
            user_id: self.user(),
            ..params.into_inner()
        };
        debug!("set_preferences: {params:?}");

        let result = self
            .planner
            .set_preferences_result(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to update preferences", &e))?;

        text_result(result.to_string())
    }
}
