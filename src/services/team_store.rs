// src/services/team_store.rs
use crate::models::{ServiceError, Team, TeamInput};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// Authoritative in-memory team collection, newest first
#[derive(Debug, Clone, Default)]
pub struct TeamStore {
    teams: Vec<Team>,
}

impl TeamStore {
    pub fn new() -> Self {
        Self { teams: Vec::new() }
    }

    // Build a store from existing records, rejecting duplicate ids or codes
    pub fn seeded(teams: Vec<Team>) -> Result<Self, ServiceError> {
        let mut ids = HashSet::new();
        let mut codes = HashSet::new();

        for team in &teams {
            if !ids.insert(team.id.as_str()) {
                return Err(ServiceError::BadRequest(format!("Duplicate team id in seed: {}", team.id)));
            }
            if !codes.insert(team.code.as_str()) {
                return Err(ServiceError::DuplicateCode(team.code.clone()));
            }
        }

        info!("🌱 Seeded store with {} teams", teams.len());
        Ok(Self { teams })
    }

    // Load a JSON array of teams from disk
    pub fn load_seed_file(path: &Path) -> Result<Self, ServiceError> {
        let content = fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read seed file {}: {:?}", path.display(), e);
            ServiceError::OperationFailed(format!("Cannot read seed file {}", path.display()))
        })?;

        let teams: Vec<Team> = serde_json::from_str(&content).map_err(|e| {
            warn!("Failed to parse seed file {}: {:?}", path.display(), e);
            ServiceError::OperationFailed(format!("Invalid seed file {}: {}", path.display(), e))
        })?;

        Self::seeded(teams)
    }

    pub fn all(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }

    fn code_taken(&self, code: &str, except_id: Option<&str>) -> bool {
        self.teams
            .iter()
            .any(|team| team.code == code && Some(team.id.as_str()) != except_id)
    }

    // Insert a new team at the front of the collection
    pub fn create(&mut self, input: TeamInput) -> Result<Team, ServiceError> {
        if self.code_taken(&input.code, None) {
            return Err(ServiceError::DuplicateCode(input.code));
        }

        let team = Team::new(input);
        self.teams.insert(0, team.clone());

        debug!("Created team id={} code={}", team.id, team.code);
        Ok(team)
    }

    // Replace the mutable fields of a team. Ok(None) when the id is unknown.
    pub fn update(&mut self, id: &str, input: TeamInput) -> Result<Option<Team>, ServiceError> {
        if self.code_taken(&input.code, Some(id)) {
            return Err(ServiceError::DuplicateCode(input.code));
        }

        match self.teams.iter_mut().find(|team| team.id == id) {
            Some(team) => {
                team.apply(input);
                debug!("Updated team id={} code={}", team.id, team.code);
                Ok(Some(team.clone()))
            }
            None => {
                debug!("Update skipped, no team with id={}", id);
                Ok(None)
            }
        }
    }

    // Remove a team; returns the removed record if there was one
    pub fn delete(&mut self, id: &str) -> Option<Team> {
        let position = self.teams.iter().position(|team| team.id == id)?;
        let removed = self.teams.remove(position);

        debug!("Deleted team id={}", id);
        Some(removed)
    }
}
