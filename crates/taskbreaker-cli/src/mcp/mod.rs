//! MCP server exposing the planner as tools over stdio.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use taskbreaker_core::Planner;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    GenerateTask, ListTasks, McpResult, SetPreferences, TaskRef, UpdateSubtask, UserRef,
};

const INSTRUCTIONS: &str = r#"Taskbreaker breaks a task into 3 to 10 subtasks and schedules them into days or sessions.

## Core Concepts
- **Task**: a stored plan with a name, a time budget (days or hours), subtasks, a schedule and notes
- **Subtask**: id ("1", "2", ...), name, duration ("2h", "45m"), priority (High/Medium/Low) and a done flag
- **Preferences**: maximum hours per day or session and the days the user works on

All tools act on behalf of the user the server was started for. Tasks of other users cannot be read or changed.

## Workflow
1. `generate_task` with task_name, time_mode ("days" or "hours") and amount
2. `show_task` to review subtasks and schedule
3. `update_subtask` with done=true as work progresses
4. `list_tasks` for an overview and `delete_task` to remove finished work

Use `get_preferences` and `set_preferences` to change how subtasks are packed into days."#;

/// MCP server for taskbreaker
#[derive(Clone)]
pub struct TaskbreakerMcpServer {
    planner: Arc<Planner>,
    user_id: Arc<str>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TaskbreakerMcpServer {
    pub fn new(planner: Planner, user_id: &str) -> Self {
        Self {
            planner: Arc::new(planner),
            user_id: Arc::from(user_id),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone(), self.user_id.clone())
    }

    #[tool(
        name = "generate_task",
        description = "Break a task into 3 to 10 subtasks and schedule them. Provide task_name, time_mode ('days' or 'hours', default 'days') and amount (number of days or hours, at least 1). Subtasks are packed into day1, day2, ... (or session1, ...) without exceeding the user's maximum hours per day. Returns the stored task with its ID."
    )]
    async fn generate_task(&self, params: Parameters<GenerateTask>) -> McpResult {
        self.handlers().generate_task(params).await
    }

    #[tool(
        name = "list_tasks",
        description = "List the user's stored tasks, newest first, with progress (completed/total subtasks) and estimated time."
    )]
    async fn list_tasks(&self, params: Parameters<ListTasks>) -> McpResult {
        self.handlers().list_tasks(params).await
    }

    #[tool(
        name = "show_task",
        description = "Show one task with all subtasks (durations, priorities, done flags), its schedule and notes. Requires task_id."
    )]
    async fn show_task(&self, params: Parameters<TaskRef>) -> McpResult {
        self.handlers().show_task(params).await
    }

    #[tool(
        name = "update_subtask",
        description = "Mark a subtask as done (done=true) or not done (done=false). Requires task_id and subtask_id (for example \"2\"). The schedule and estimated total are not changed."
    )]
    async fn update_subtask(&self, params: Parameters<UpdateSubtask>) -> McpResult {
        self.handlers().update_subtask(params).await
    }

    #[tool(
        name = "delete_task",
        description = "Permanently delete a task and its subtasks. Requires task_id. This cannot be undone."
    )]
    async fn delete_task(&self, params: Parameters<TaskRef>) -> McpResult {
        self.handlers().delete_task(params).await
    }

    #[tool(
        name = "get_preferences",
        description = "Show the user's scheduling preferences: maximum hours per day or session and work days."
    )]
    async fn get_preferences(&self, params: Parameters<UserRef>) -> McpResult {
        self.handlers().get_preferences(params).await
    }

    #[tool(
        name = "set_preferences",
        description = "Change scheduling preferences. max_hours_per_day must be 1 to 24; work_days is a non-empty list such as [\"Monday\", \"Tuesday\"]. Omitted fields keep their value."
    )]
    async fn set_preferences(&self, params: Parameters<SetPreferences>) -> McpResult {
        self.handlers().set_preferences(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TaskbreakerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "taskbreaker".to_string(),
                title: Some("Taskbreaker".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: TaskbreakerMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!(
        "Starting taskbreaker MCP server on stdio for user '{}'",
        server.user_id
    );
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.map_err(|e| {
        error!("serving error: {e:?}");
        e
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use taskbreaker_core::PlannerBuilder;
    use tempfile::TempDir;

    use super::*;

    async fn server() -> (TempDir, TaskbreakerMcpServer) {
        let temp_dir = TempDir::new().unwrap();
        let planner = PlannerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .unwrap();
        (temp_dir, TaskbreakerMcpServer::new(planner, "alice"))
    }

    #[tokio::test]
    async fn test_registers_all_tools() {
        let (_temp_dir, server) = server().await;
        let mut names: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "delete_task",
                "generate_task",
                "get_preferences",
                "list_tasks",
                "set_preferences",
                "show_task",
                "update_subtask",
            ]
        );
    }

    #[tokio::test]
    async fn test_tools_run_as_server_user() {
        let (_temp_dir, server) = server().await;
        let params: GenerateTask = serde_json::from_value(serde_json::json!({
            "user_id": "mallory",
            "task_name": "Plant a garden",
            "amount": 2
        }))
        .unwrap();
        server.generate_task(Parameters(params)).await.unwrap();

        let task = server
            .planner
            .get_task(&taskbreaker_core::TaskRef {
                user_id: "alice".to_string(),
                task_id: 1,
            })
            .await
            .unwrap();
        assert_eq!(task.user_id, "alice");
        assert_eq!(task.task_name, "Plant a garden");
    }

    #[tokio::test]
    async fn test_missing_task_is_invalid_params() {
        let (_temp_dir, server) = server().await;
        let params: TaskRef = serde_json::from_value(serde_json::json!({ "task_id": 7 })).unwrap();
        let err = server.show_task(Parameters(params)).await.unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_server_info() {
        let (_temp_dir, server) = server().await;
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "taskbreaker");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.instructions.unwrap().contains("generate_task"));
    }
}
