use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TeamStatus {
    Active,
    Inactive,
}

// Team record as held by the store
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: String,
    pub code: String,
    pub email: String,
    pub entity: String,
    pub manager: String,
    pub status: TeamStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Mutable fields of a team, used for both create and edit payloads
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamInput {
    pub name: String,
    pub description: String,
    pub code: String,
    pub email: String,
    pub entity: String,
    pub manager: String,
    pub status: TeamStatus,
}

impl Team {
    // Build a fresh record with a new id and both timestamps set to now
    pub fn new(input: TeamInput) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            code: input.code,
            email: input.email,
            entity: input.entity,
            manager: input.manager,
            status: input.status,
            created_at: now,
            updated_at: now,
        }
    }

    // Replace every mutable field and refresh updated_at
    pub fn apply(&mut self, input: TeamInput) {
        self.name = input.name;
        self.description = input.description;
        self.code = input.code;
        self.email = input.email;
        self.entity = input.entity;
        self.manager = input.manager;
        self.status = input.status;
        // Keep updated_at monotonic even if the clock steps back
        self.updated_at = Utc::now().max(self.created_at);
    }
}

impl From<&Team> for TeamInput {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            description: team.description.clone(),
            code: team.code.clone(),
            email: team.email.clone(),
            entity: team.entity.clone(),
            manager: team.manager.clone(),
            status: team.status,
        }
    }
}
