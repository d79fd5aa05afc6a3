// src/services/team_view.rs
use crate::models::{PageSize, SortDirection, SortField, Team, TeamFilters, TeamSort};
use std::cmp::Ordering;

// Case-insensitive filter over name/code, entity and status
pub fn matches_filters(team: &Team, filters: &TeamFilters) -> bool {
    let search = filters.search.to_lowercase();
    let entity = filters.entity.to_lowercase();

    let matches_search = search.is_empty()
        || team.name.to_lowercase().contains(&search)
        || team.code.to_lowercase().contains(&search);

    let matches_entity = entity.is_empty() || team.entity.to_lowercase().contains(&entity);

    matches_search && matches_entity && filters.status.matches(team.status)
}

pub fn compare_by(a: &Team, b: &Team, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Description => a.description.cmp(&b.description),
        SortField::Code => a.code.cmp(&b.code),
        SortField::Email => a.email.cmp(&b.email),
        SortField::Entity => a.entity.cmp(&b.entity),
        SortField::Manager => a.manager.cmp(&b.manager),
        SortField::Status => a.status.cmp(&b.status),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

// Filter then stable-sort a copy of the collection
pub fn filter_and_sort(teams: &[Team], filters: &TeamFilters, sort: &TeamSort) -> Vec<Team> {
    let mut filtered: Vec<Team> = teams
        .iter()
        .filter(|team| matches_filters(team, filters))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort.field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    filtered
}

// Number of pages for a filtered count, never below one
pub fn total_pages(total_items: usize, page_size: PageSize) -> usize {
    let size = page_size.get();
    ((total_items + size - 1) / size).max(1)
}

// Clamp a requested page into [1, total_pages]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

pub fn page_slice(items: &[Team], page: usize, page_size: PageSize) -> &[Team] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}
