// src/tests/mod.rs
use crate::models::{PageSize, Team, TeamInput, TeamStatus};
use crate::services::team_store::TeamStore;
use crate::services::team_workflow::TeamWorkflow;
use chrono::{Duration, Utc};
use std::time::Duration as StdDuration;

mod config_tests;
mod validation_tests;
mod view_tests;

pub fn input(name: &str, code: &str) -> TeamInput {
    TeamInput {
        name: name.to_string(),
        description: format!("{} handles platform work", name),
        code: code.to_string(),
        email: format!("{}@example.com", code.to_lowercase()),
        entity: "First National Bank".to_string(),
        manager: "Jane O'Neil".to_string(),
        status: TeamStatus::Active,
    }
}

// A record that was created a day ago, so fresh records sort after it
pub fn aged_team(name: &str, code: &str) -> Team {
    let mut team = Team::new(input(name, code));
    let past = Utc::now() - Duration::days(1);
    team.created_at = past;
    team.updated_at = past;
    team
}

pub fn numbered_teams(count: usize) -> Vec<Team> {
    (1..=count)
        .map(|n| aged_team(&format!("Team {:02}", n), &format!("T{:02}", n)))
        .collect()
}

pub fn workflow_with(teams: Vec<Team>) -> TeamWorkflow {
    let store = TeamStore::seeded(teams).unwrap();
    TeamWorkflow::new(store, PageSize::Ten, StdDuration::from_millis(0))
}

pub fn slow_workflow_with(teams: Vec<Team>) -> TeamWorkflow {
    let store = TeamStore::seeded(teams).unwrap();
    TeamWorkflow::new(store, PageSize::Ten, StdDuration::from_millis(30))
}
