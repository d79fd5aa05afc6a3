// src/services/team_workflow.rs
use crate::models::{
    ConfirmOutcome, FilterUpdate, Notification, OperationKind, PageSize, Pagination, PaginationUpdate, Panel,
    PanelTarget, PendingAction, PendingWorkflow, ServiceError, Team, TeamFilters, TeamInput, TeamPage, TeamSort,
    WorkflowPhase, WorkflowSnapshot,
};
use crate::services::team_store::TeamStore;
use crate::services::team_view;
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

// Everything the admin screen keeps between calls
struct TeamsState {
    store: TeamStore,
    filtered: Vec<Team>,
    filters: TeamFilters,
    sort: TeamSort,
    pagination: Pagination,
    loading: bool,
    error: Option<String>,
    notification: Option<Notification>,
    pending: HashMap<OperationKind, PendingWorkflow>,
    // Open panels and the team each edit/delete panel was opened for
    open_panels: HashMap<Panel, Option<Team>>,
}

impl TeamsState {
    // Re-filter and re-sort, then fix up the derived pagination fields
    fn apply_filters_and_sort(&mut self) {
        self.filtered = team_view::filter_and_sort(self.store.all(), &self.filters, &self.sort);
        self.recount();
    }

    fn recount(&mut self) {
        let total_pages = team_view::total_pages(self.filtered.len(), self.pagination.page_size);
        self.pagination.total_items = self.filtered.len();
        self.pagination.total_pages = total_pages;
        self.pagination.page = team_view::clamp_page(self.pagination.page, total_pages);
    }

    fn page(&self) -> TeamPage {
        let items = team_view::page_slice(&self.filtered, self.pagination.page, self.pagination.page_size);

        TeamPage {
            items: items.to_vec(),
            pagination: self.pagination,
            filters: self.filters.clone(),
            sort: self.sort,
        }
    }

    fn stage(&mut self, action: PendingAction) -> Result<PendingWorkflow, ServiceError> {
        let kind = action.kind();
        if let Some(existing) = self.pending.get(&kind) {
            return Err(ServiceError::InvalidTransition(format!(
                "a {} is already {:?}",
                kind, existing.phase
            )));
        }

        let workflow = PendingWorkflow {
            action,
            phase: WorkflowPhase::Staged,
        };
        self.pending.insert(kind, workflow.clone());
        self.error = None;

        Ok(workflow)
    }

    // Apply a staged action to the store
    fn commit(&mut self, action: &PendingAction) -> Result<Option<Team>, ServiceError> {
        match action {
            PendingAction::Create { input } => self.store.create(input.clone()).map(Some),
            PendingAction::Edit { id, input } => {
                let updated = self.store.update(id, input.clone())?;
                if updated.is_none() {
                    warn!("Edit confirmed for team {} which no longer exists", id);
                }
                Ok(updated)
            }
            PendingAction::Delete { id, .. } => Ok(self.store.delete(id)),
        }
    }

    // Second half of a confirm, once the simulated round-trip is over
    fn finish_commit(&mut self, kind: OperationKind, action: &PendingAction) -> ConfirmOutcome {
        let result = self.commit(action);
        self.loading = false;

        match result {
            Ok(team) => {
                self.pending.remove(&kind);
                self.apply_filters_and_sort();
                for panel in Panel::for_kind(kind) {
                    self.open_panels.remove(panel);
                }

                let notification = Notification::new(kind, action.team_name());
                self.notification = Some(notification.clone());

                info!("✅ {}", notification.message);
                ConfirmOutcome::Committed { notification, team }
            }
            Err(err) => {
                if let Some(workflow) = self.pending.get_mut(&kind) {
                    workflow.phase = WorkflowPhase::Staged;
                }
                let message = err.to_string();
                self.error = Some(message.clone());

                error!("❌ Failed to {} team {}: {}", kind, action.team_name(), message);
                ConfirmOutcome::Failed { error: message }
            }
        }
    }

    fn snapshot(&self) -> WorkflowSnapshot {
        WorkflowSnapshot {
            view: self.page(),
            loading: self.loading,
            error: self.error.clone(),
            notification: self.notification.clone(),
            pending: OperationKind::ALL
                .iter()
                .filter_map(|kind| self.pending.get(kind).cloned())
                .collect(),
            open_panels: Panel::ALL
                .iter()
                .copied()
                .filter(|panel| self.open_panels.contains_key(panel))
                .collect(),
            panel_targets: Panel::ALL
                .iter()
                .filter_map(|panel| match self.open_panels.get(panel) {
                    Some(Some(team)) => Some(PanelTarget {
                        panel: *panel,
                        team: team.clone(),
                    }),
                    _ => None,
                })
                .collect(),
        }
    }
}

// Shared handle to the team table state and its stage/confirm workflows
#[derive(Clone)]
pub struct TeamWorkflow {
    state: Arc<Mutex<TeamsState>>,
    latency: Duration,
}

impl TeamWorkflow {
    pub fn new(store: TeamStore, page_size: PageSize, latency: Duration) -> Self {
        let mut state = TeamsState {
            store,
            filtered: Vec::new(),
            filters: TeamFilters::default(),
            sort: TeamSort::default(),
            pagination: Pagination::new(page_size),
            loading: false,
            error: None,
            notification: None,
            pending: HashMap::new(),
            open_panels: HashMap::new(),
        };
        state.apply_filters_and_sort();

        Self {
            state: Arc::new(Mutex::new(state)),
            latency,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TeamsState>, ServiceError> {
        self.state.lock().map_err(|e| {
            error!("❌ Team state lock poisoned: {:?}", e);
            ServiceError::InternalServerError
        })
    }

    // A commit in flight always gets to clear `loading`
    fn lock_for_commit(&self) -> MutexGuard<'_, TeamsState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            error!("❌ Team state lock poisoned during commit, recovering");
            poisoned.into_inner()
        })
    }

    pub fn snapshot(&self) -> Result<WorkflowSnapshot, ServiceError> {
        Ok(self.lock()?.snapshot())
    }

    pub fn current_page(&self) -> Result<TeamPage, ServiceError> {
        Ok(self.lock()?.page())
    }

    // Full filtered and sorted sequence, not just the current page
    pub fn filtered_teams(&self) -> Result<Vec<Team>, ServiceError> {
        Ok(self.lock()?.filtered.clone())
    }

    pub fn teams(&self) -> Result<Vec<Team>, ServiceError> {
        Ok(self.lock()?.store.all().to_vec())
    }

    pub fn find_team(&self, id: &str) -> Result<Option<Team>, ServiceError> {
        Ok(self.lock()?.store.find(id).cloned())
    }

    pub fn set_filters(&self, update: FilterUpdate) -> Result<TeamPage, ServiceError> {
        let mut state = self.lock()?;
        state.filters.merge(update);
        state.pagination.page = 1;
        state.apply_filters_and_sort();

        debug!("Filters now {:?}, {} teams match", state.filters, state.pagination.total_items);
        Ok(state.page())
    }

    pub fn set_sort(&self, sort: TeamSort) -> Result<TeamPage, ServiceError> {
        let mut state = self.lock()?;
        state.sort = sort;
        state.apply_filters_and_sort();

        debug!("Sorting by {} {}", sort.field, sort.direction);
        Ok(state.page())
    }

    pub fn set_page(&self, page: usize) -> Result<TeamPage, ServiceError> {
        let mut state = self.lock()?;
        state.pagination.page = team_view::clamp_page(page, state.pagination.total_pages);
        Ok(state.page())
    }

    pub fn set_page_size(&self, page_size: PageSize) -> Result<TeamPage, ServiceError> {
        let mut state = self.lock()?;
        state.pagination.page_size = page_size;
        state.recount();
        Ok(state.page())
    }

    pub fn set_pagination(&self, update: PaginationUpdate) -> Result<TeamPage, ServiceError> {
        let page_size = update.page_size.map(PageSize::try_from).transpose()?;

        let mut state = self.lock()?;
        if let Some(page_size) = page_size {
            state.pagination.page_size = page_size;
        }
        if let Some(page) = update.page {
            state.pagination.page = page;
        }
        state.recount();
        Ok(state.page())
    }

    // Open a modal, drawer or dialog; edit and delete panels need a target team
    pub fn open_panel(&self, panel: Panel, team_id: Option<&str>) -> Result<WorkflowSnapshot, ServiceError> {
        let mut state = self.lock()?;

        let target = if panel.needs_team() {
            let id = team_id
                .ok_or_else(|| ServiceError::BadRequest(format!("Panel {} needs a team id", panel)))?;
            let team = state
                .store
                .find(id)
                .cloned()
                .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
            Some(team)
        } else {
            None
        };

        state.open_panels.insert(panel, target);
        state.error = None;
        Ok(state.snapshot())
    }

    pub fn close_panel(&self, panel: Panel) -> Result<WorkflowSnapshot, ServiceError> {
        let mut state = self.lock()?;
        state.open_panels.remove(&panel);
        state.error = None;
        Ok(state.snapshot())
    }

    pub fn reset_error(&self) -> Result<(), ServiceError> {
        self.lock()?.error = None;
        Ok(())
    }

    pub fn take_notification(&self) -> Result<Option<Notification>, ServiceError> {
        Ok(self.lock()?.notification.take())
    }

    pub fn stage_create(&self, input: TeamInput) -> Result<PendingWorkflow, ServiceError> {
        let mut state = self.lock()?;
        let workflow = state.stage(PendingAction::Create { input })?;

        info!("📝 Staged new team: {}", workflow.action.team_name());
        Ok(workflow)
    }

    pub fn stage_edit(&self, id: &str, input: TeamInput) -> Result<PendingWorkflow, ServiceError> {
        let mut state = self.lock()?;
        if state.store.find(id).is_none() {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        let workflow = state.stage(PendingAction::Edit {
            id: id.to_string(),
            input,
        })?;

        info!("📝 Staged edit of team: {}", id);
        Ok(workflow)
    }

    pub fn request_delete(&self, id: &str) -> Result<PendingWorkflow, ServiceError> {
        let mut state = self.lock()?;
        let name = match state.store.find(id) {
            Some(team) => team.name.clone(),
            None => return Err(ServiceError::NotFound(id.to_string())),
        };
        let workflow = state.stage(PendingAction::Delete {
            id: id.to_string(),
            name,
        })?;

        info!("🗑️ Delete of team {} awaiting confirmation", id);
        Ok(workflow)
    }

    // Drop a staged action without touching the store
    pub fn cancel(&self, kind: OperationKind) -> Result<Option<PendingAction>, ServiceError> {
        let mut state = self.lock()?;

        match state.pending.get(&kind).map(|workflow| workflow.phase) {
            Some(WorkflowPhase::Committing) => Err(ServiceError::InvalidTransition(format!(
                "the {} is already being committed",
                kind
            ))),
            Some(WorkflowPhase::Staged) => {
                state.error = None;
                let cancelled = state.pending.remove(&kind).map(|workflow| workflow.action);
                info!("↩️ Cancelled pending {}", kind);
                Ok(cancelled)
            }
            None => Ok(None),
        }
    }

    pub async fn confirm_create(&self) -> Result<ConfirmOutcome, ServiceError> {
        self.confirm(OperationKind::Create).await
    }

    pub async fn confirm_edit(&self) -> Result<ConfirmOutcome, ServiceError> {
        self.confirm(OperationKind::Edit).await
    }

    pub async fn confirm_delete(&self) -> Result<ConfirmOutcome, ServiceError> {
        self.confirm(OperationKind::Delete).await
    }

    // Commit the staged action for `kind` after the simulated round-trip
    pub async fn confirm(&self, kind: OperationKind) -> Result<ConfirmOutcome, ServiceError> {
        let action = {
            let mut state = self.lock()?;
            if state.loading {
                debug!("Ignoring confirm of {} while another commit is in flight", kind);
                return Ok(ConfirmOutcome::Ignored);
            }

            let action = match state.pending.get_mut(&kind) {
                Some(workflow) if workflow.phase == WorkflowPhase::Staged => {
                    workflow.phase = WorkflowPhase::Committing;
                    workflow.action.clone()
                }
                _ => return Ok(ConfirmOutcome::NothingStaged),
            };

            state.loading = true;
            state.error = None;
            action
        };

        info!("⏳ Committing {} for team: {}", kind, action.team_name());

        // Detached: dropping this future never leaves the slot in Committing
        let handle = self.clone();
        let commit = actix_web::rt::spawn(async move {
            tokio::time::sleep(handle.latency).await;
            let outcome = handle.lock_for_commit().finish_commit(kind, &action);
            outcome
        });

        commit.await.map_err(|e| {
            error!("❌ Commit task for {} did not finish: {:?}", kind, e);
            ServiceError::InternalServerError
        })
    }
}
