// src/models/workflow.rs
use crate::models::{ServiceError, Team, TeamInput, TeamPage};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    #[display(fmt = "create")]
    Create,
    #[display(fmt = "edit")]
    Edit,
    #[display(fmt = "delete")]
    Delete,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [OperationKind::Create, OperationKind::Edit, OperationKind::Delete];

    // Past-tense verb used in notifications
    pub fn verb(&self) -> &'static str {
        match self {
            OperationKind::Create => "created",
            OperationKind::Edit => "updated",
            OperationKind::Delete => "deleted",
        }
    }
}

impl FromStr for OperationKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(OperationKind::Create),
            "edit" => Ok(OperationKind::Edit),
            "delete" => Ok(OperationKind::Delete),
            other => Err(ServiceError::BadRequest(format!("Unknown workflow: {}", other))),
        }
    }
}

// A change waiting for explicit confirmation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingAction {
    Create { input: TeamInput },
    Edit { id: String, input: TeamInput },
    Delete { id: String, name: String },
}

impl PendingAction {
    pub fn kind(&self) -> OperationKind {
        match self {
            PendingAction::Create { .. } => OperationKind::Create,
            PendingAction::Edit { .. } => OperationKind::Edit,
            PendingAction::Delete { .. } => OperationKind::Delete,
        }
    }

    // Name shown in the notification once the action commits
    pub fn team_name(&self) -> &str {
        match self {
            PendingAction::Create { input } => &input.name,
            PendingAction::Edit { input, .. } => &input.name,
            PendingAction::Delete { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    Staged,
    Committing,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PendingWorkflow {
    pub action: PendingAction,
    pub phase: WorkflowPhase,
}

// Success message raised after a commit
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: OperationKind,
    pub team_name: String,
    pub message: String,
}

impl Notification {
    pub fn new(kind: OperationKind, team_name: &str) -> Self {
        Self {
            kind,
            team_name: team_name.to_string(),
            message: format!("Team \"{}\" {} successfully", team_name, kind.verb()),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    #[display(fmt = "create_modal")]
    CreateModal,
    #[display(fmt = "create_drawer")]
    CreateDrawer,
    #[display(fmt = "edit_modal")]
    EditModal,
    #[display(fmt = "edit_drawer")]
    EditDrawer,
    #[display(fmt = "delete_dialog")]
    DeleteDialog,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::CreateModal,
        Panel::CreateDrawer,
        Panel::EditModal,
        Panel::EditDrawer,
        Panel::DeleteDialog,
    ];

    // Panels that belong to a workflow and close when it commits
    pub fn for_kind(kind: OperationKind) -> &'static [Panel] {
        match kind {
            OperationKind::Create => &[Panel::CreateModal, Panel::CreateDrawer],
            OperationKind::Edit => &[Panel::EditModal, Panel::EditDrawer],
            OperationKind::Delete => &[Panel::DeleteDialog],
        }
    }

    pub fn needs_team(&self) -> bool {
        matches!(self, Panel::EditModal | Panel::EditDrawer | Panel::DeleteDialog)
    }
}

impl FromStr for Panel {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create_modal" => Ok(Panel::CreateModal),
            "create_drawer" => Ok(Panel::CreateDrawer),
            "edit_modal" => Ok(Panel::EditModal),
            "edit_drawer" => Ok(Panel::EditDrawer),
            "delete_dialog" => Ok(Panel::DeleteDialog),
            other => Err(ServiceError::BadRequest(format!("Unknown panel: {}", other))),
        }
    }
}

// Result of a confirm call
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConfirmOutcome {
    Committed {
        notification: Notification,
        team: Option<Team>,
    },
    Failed {
        error: String,
    },
    // Another commit is already in flight
    Ignored,
    // Nothing staged for this workflow
    NothingStaged,
}

// Team an edit or delete panel was opened for
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PanelTarget {
    pub panel: Panel,
    pub team: Team,
}

// Everything the table screen needs to render itself
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorkflowSnapshot {
    pub view: TeamPage,
    pub loading: bool,
    pub error: Option<String>,
    pub notification: Option<Notification>,
    pub pending: Vec<PendingWorkflow>,
    pub open_panels: Vec<Panel>,
    pub panel_targets: Vec<PanelTarget>,
}

impl WorkflowSnapshot {
    pub fn target(&self, panel: Panel) -> Option<&Team> {
        self.panel_targets
            .iter()
            .find(|target| target.panel == panel)
            .map(|target| &target.team)
    }
}
