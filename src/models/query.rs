// src/models/query.rs
use crate::models::{ServiceError, Team, TeamStatus};
use derive_more::Display;
use serde::{Deserialize, Serialize};

// Status filter, "all" disables it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[serde(rename = "all")]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, status: TeamStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == TeamStatus::Active,
            StatusFilter::Inactive => status == TeamStatus::Inactive,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamFilters {
    pub search: String,
    pub entity: String,
    pub status: StatusFilter,
}

impl Default for TeamFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            entity: String::new(),
            status: StatusFilter::All,
        }
    }
}

// Partial filter update; missing fields are left as they are
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub entity: Option<String>,
    pub status: Option<StatusFilter>,
}

impl TeamFilters {
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(entity) = update.entity {
            self.entity = entity;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[display(fmt = "id")]
    Id,
    #[display(fmt = "name")]
    Name,
    #[display(fmt = "description")]
    Description,
    #[display(fmt = "code")]
    Code,
    #[display(fmt = "email")]
    Email,
    #[display(fmt = "entity")]
    Entity,
    #[display(fmt = "manager")]
    Manager,
    #[display(fmt = "status")]
    Status,
    #[display(fmt = "created_at")]
    CreatedAt,
    #[display(fmt = "updated_at")]
    UpdatedAt,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[display(fmt = "asc")]
    Asc,
    #[display(fmt = "desc")]
    Desc,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TeamSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for TeamSort {
    fn default() -> Self {
        Self {
            field: SortField::UpdatedAt,
            direction: SortDirection::Desc,
        }
    }
}

// The page sizes offered by the table footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Ten,
    Twenty,
}

impl PageSize {
    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Ten
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ServiceError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(PageSize::Ten),
            20 => Ok(PageSize::Twenty),
            other => Err(ServiceError::BadRequest(format!(
                "Unsupported page size {}, expected 10 or 20",
                other
            ))),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: PageSize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: 1,
            page_size,
            total_items: 0,
            total_pages: 1,
        }
    }
}

// Caller-side pagination change
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PaginationUpdate {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

// One page of the derived table view
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamPage {
    pub items: Vec<Team>,
    pub pagination: Pagination,
    pub filters: TeamFilters,
    pub sort: TeamSort,
}
