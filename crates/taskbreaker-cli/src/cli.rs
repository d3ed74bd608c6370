//! Subcommand definitions and their handlers
//!
//! Each subcommand has a clap `Args` struct that converts into the matching
//! core parameter type through `into_params`, supplying the user from the
//! global `--user` flag:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! [`Cli`] runs the planner operation and hands the resulting Markdown to the
//! [`TerminalRenderer`].

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use taskbreaker_core::{
    display::OperationStatus,
    models::{TimeMode, Weekday},
    params::{GenerateTask, ListTasks, SetPreferences, TaskRef, UpdateSubtask, UserRef},
    Planner,
};

use crate::renderer::TerminalRenderer;

/// Generate a plan for a task and store it
///
/// The plan holds 3 to 10 subtasks grouped into days or sessions that respect
/// the maximum hours per day from your preferences.
#[derive(Args)]
pub struct GenerateTaskArgs {
    #[arg(help = "Task to break down, e.g. \"Write the quarterly report\"")]
    pub task_name: String,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = TimeModeArg::Days,
        help = "Whether the budget counts days or hours"
    )]
    pub mode: TimeModeArg,
    #[arg(short, long, help = "Number of days or hours available")]
    pub amount: u32,
}

impl GenerateTaskArgs {
    pub fn into_params(self, user_id: &str) -> GenerateTask {
        GenerateTask {
            user_id: user_id.to_string(),
            task_name: self.task_name,
            time_mode: self.mode.into(),
            amount: self.amount,
        }
    }
}

/// Show a stored task with its subtasks and schedule
#[derive(Args)]
pub struct ShowTaskArgs {
    #[arg(help = "ID of the task to show")]
    pub id: u64,
}

impl ShowTaskArgs {
    pub fn into_params(self, user_id: &str) -> TaskRef {
        TaskRef {
            user_id: user_id.to_string(),
            task_id: self.id,
        }
    }
}

/// Mark a subtask as done, or as not done with --undo
#[derive(Args)]
pub struct DoneSubtaskArgs {
    #[arg(help = "ID of the task")]
    pub id: u64,
    #[arg(help = "ID of the subtask within the task, e.g. 2")]
    pub subtask: String,
    /// Mark the subtask as not done instead
    #[arg(long)]
    pub undo: bool,
}

impl DoneSubtaskArgs {
    pub fn into_params(self, user_id: &str) -> UpdateSubtask {
        UpdateSubtask {
            user_id: user_id.to_string(),
            task_id: self.id,
            subtask_id: self.subtask,
            done: !self.undo,
        }
    }
}

/// Delete a stored task permanently
#[derive(Args)]
pub struct DeleteTaskArgs {
    #[arg(help = "ID of the task to delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl DeleteTaskArgs {
    pub fn into_params(self, user_id: &str) -> TaskRef {
        TaskRef {
            user_id: user_id.to_string(),
            task_id: self.id,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Generate a plan for a new task
    #[command(alias = "g")]
    Generate(GenerateTaskArgs),
    /// List your tasks, newest first
    #[command(alias = "l")]
    List,
    /// Show a task with its subtasks and schedule
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Mark a subtask as done or not done
    #[command(alias = "d")]
    Done(DoneSubtaskArgs),
    /// Delete a task
    Delete(DeleteTaskArgs),
}

/// Change scheduling preferences; omitted options keep their value
#[derive(Args)]
pub struct SetPreferencesArgs {
    #[arg(long, help = "Maximum hours scheduled per day or session (1-24)")]
    pub max_hours: Option<u32>,
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = parse_weekday,
        help = "Days you work on as a comma-separated list, e.g. monday,tuesday"
    )]
    pub work_days: Option<Vec<Weekday>>,
}

impl SetPreferencesArgs {
    pub fn into_params(self, user_id: &str) -> SetPreferences {
        SetPreferences {
            user_id: user_id.to_string(),
            max_hours_per_day: self.max_hours,
            work_days: self.work_days,
        }
    }
}

fn parse_weekday(s: &str) -> std::result::Result<Weekday, String> {
    s.parse()
}

#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Show your preferences
    Show,
    /// Change your preferences
    Set(SetPreferencesArgs),
}

/// Command-line representation of the time mode
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum TimeModeArg {
    /// The amount counts days; buckets are day1, day2, ...
    Days,
    /// The amount counts hours; buckets are session1, session2, ...
    Hours,
}

impl From<TimeModeArg> for TimeMode {
    fn from(val: TimeModeArg) -> Self {
        match val {
            TimeModeArg::Days => TimeMode::Days,
            TimeModeArg::Hours => TimeMode::Hours,
        }
    }
}

/// Runs subcommands against a planner and renders their output.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    user_id: String,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, user_id: String) -> Self {
        Self {
            planner,
            renderer,
            user_id,
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Generate(args) => {
                let params = args.into_params(&self.user_id);
                let result = self
                    .planner
                    .generate_task_result(&params)
                    .await
                    .context("Failed to generate task")?;
                self.renderer.render(&result.to_string())
            }
            TaskCommands::List => self.list_tasks().await,
            TaskCommands::Show(args) => {
                let task = self
                    .planner
                    .get_task(&args.into_params(&self.user_id))
                    .await
                    .context("Failed to show task")?;
                self.renderer.render(&task.to_string())
            }
            TaskCommands::Done(args) => {
                let result = self
                    .planner
                    .update_subtask_result(&args.into_params(&self.user_id))
                    .await
                    .context("Failed to update subtask")?;
                self.renderer.render(&result.to_string())
            }
            TaskCommands::Delete(args) => {
                let confirmed = args.confirm;
                let params = args.into_params(&self.user_id);
                if !confirmed {
                    let task = self
                        .planner
                        .get_task(&params)
                        .await
                        .context("Failed to show task")?;
                    self.renderer.render(&task.to_string())?;
                    let status = OperationStatus::failure(format!(
                        "Not deleted. Run again with --confirm to delete task {}.",
                        task.id
                    ));
                    return self.renderer.render(&format!("\n{status}"));
                }
                let result = self
                    .planner
                    .delete_task_result(&params)
                    .await
                    .context("Failed to delete task")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_prefs_command(&self, command: PrefsCommands) -> Result<()> {
        match command {
            PrefsCommands::Show => {
                let preferences = self
                    .planner
                    .preferences(&UserRef {
                        user_id: self.user_id.clone(),
                    })
                    .await
                    .context("Failed to load preferences")?;
                self.renderer
                    .render(&format!("# Preferences for {}\n\n{preferences}", self.user_id))
            }
            PrefsCommands::Set(args) => {
                let result = self
                    .planner
                    .set_preferences_result(&args.into_params(&self.user_id))
                    .await
                    .context("Failed to update preferences")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn list_tasks(&self) -> Result<()> {
        let tasks = self
            .planner
            .list_tasks(&ListTasks {
                user_id: self.user_id.clone(),
            })
            .await
            .context("Failed to list tasks")?;
        self.renderer.render(&format!("# Tasks\n\n{tasks}"))
    }
}
