use super::{aged_team, numbered_teams, workflow_with};
use crate::models::{
    FilterUpdate, PageSize, SortDirection, SortField, StatusFilter, Team, TeamFilters, TeamSort, TeamStatus,
};
use crate::services::team_view::{clamp_page, filter_and_sort, matches_filters, page_slice, total_pages};

fn names(teams: &[Team]) -> Vec<&str> {
    teams.iter().map(|t| t.name.as_str()).collect()
}

fn sort_by(field: SortField, direction: SortDirection) -> TeamSort {
    TeamSort { field, direction }
}

#[test]
fn search_matches_name_or_code_ignoring_case() {
    let teams = vec![aged_team("Alpha Squad", "ALP001"), aged_team("Beta Force", "BET001")];
    let mut filters = TeamFilters::default();

    filters.search = "squad".to_string();
    assert_eq!(names(&filter_and_sort(&teams, &filters, &TeamSort::default())), vec!["Alpha Squad"]);

    filters.search = "bet0".to_string();
    assert_eq!(names(&filter_and_sort(&teams, &filters, &TeamSort::default())), vec!["Beta Force"]);
}

#[test]
fn entity_and_status_filters_combine() {
    let mut other_bank = aged_team("Gamma Team", "GAM001");
    other_bank.entity = "Harbor Savings".to_string();
    let mut inactive = aged_team("Delta Unit", "DEL001");
    inactive.status = TeamStatus::Inactive;
    let active = aged_team("Alpha Squad", "ALP001");

    let filters = TeamFilters {
        search: String::new(),
        entity: "national".to_string(),
        status: StatusFilter::Active,
    };

    assert!(matches_filters(&active, &filters));
    assert!(!matches_filters(&other_bank, &filters));
    assert!(!matches_filters(&inactive, &filters));

    let inactive_only = TeamFilters {
        status: StatusFilter::Inactive,
        ..TeamFilters::default()
    };
    assert!(matches_filters(&inactive, &inactive_only));
    assert!(!matches_filters(&active, &inactive_only));
}

#[test]
fn sort_by_name_both_directions() {
    let teams = vec![aged_team("Beta", "B1"), aged_team("Alpha", "A1"), aged_team("Gamma", "G1")];
    let filters = TeamFilters::default();

    let asc = filter_and_sort(&teams, &filters, &sort_by(SortField::Name, SortDirection::Asc));
    assert_eq!(names(&asc), vec!["Alpha", "Beta", "Gamma"]);

    let desc = filter_and_sort(&teams, &filters, &sort_by(SortField::Name, SortDirection::Desc));
    assert_eq!(names(&desc), vec!["Gamma", "Beta", "Alpha"]);
}

#[test]
fn equal_keys_keep_collection_order() {
    let mut teams = vec![aged_team("First", "F1"), aged_team("Second", "S1"), aged_team("Third", "T1")];
    teams[1].status = TeamStatus::Inactive;

    let sorted = filter_and_sort(
        &teams,
        &TeamFilters::default(),
        &sort_by(SortField::Status, SortDirection::Asc),
    );
    assert_eq!(names(&sorted), vec!["First", "Third", "Second"]);
}

#[test]
fn pagination_math() {
    assert_eq!(total_pages(25, PageSize::Ten), 3);
    assert_eq!(total_pages(20, PageSize::Ten), 2);
    assert_eq!(total_pages(0, PageSize::Ten), 1);
    assert_eq!(total_pages(25, PageSize::Twenty), 2);

    assert_eq!(clamp_page(4, 3), 3);
    assert_eq!(clamp_page(0, 3), 1);

    let teams = numbered_teams(25);
    assert_eq!(page_slice(&teams, 3, PageSize::Ten).len(), 5);
    assert!(page_slice(&teams, 9, PageSize::Ten).is_empty());
}

#[test]
fn workflow_clamps_page_past_the_end() {
    let workflow = workflow_with(numbered_teams(25));
    workflow
        .set_sort(sort_by(SortField::Code, SortDirection::Asc))
        .unwrap();

    let page = workflow.set_page(3).unwrap();
    assert_eq!(page.pagination.total_pages, 3);
    assert_eq!(page.pagination.total_items, 25);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0].code, "T21");

    let clamped = workflow.set_page(4).unwrap();
    assert_eq!(clamped.pagination.page, 3);
    assert_eq!(clamped.items.len(), 5);
}

#[test]
fn narrowing_filters_resets_page() {
    let workflow = workflow_with(numbered_teams(25));
    workflow.set_page(3).unwrap();

    let page = workflow
        .set_filters(FilterUpdate {
            search: Some("team 1".to_string()),
            ..FilterUpdate::default()
        })
        .unwrap();

    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.total_items, 10);
    assert_eq!(page.pagination.total_pages, 1);
}

#[test]
fn page_size_change_only_reslices() {
    let workflow = workflow_with(numbered_teams(25));
    workflow.set_page(3).unwrap();

    let page = workflow.set_page_size(PageSize::Twenty).unwrap();
    assert_eq!(page.pagination.total_pages, 2);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.items.len(), 5);
}

#[test]
fn partial_filter_update_keeps_other_fields() {
    let workflow = workflow_with(numbered_teams(3));
    workflow
        .set_filters(FilterUpdate {
            status: Some(StatusFilter::Inactive),
            ..FilterUpdate::default()
        })
        .unwrap();

    let page = workflow
        .set_filters(FilterUpdate {
            entity: Some("bank".to_string()),
            ..FilterUpdate::default()
        })
        .unwrap();

    assert_eq!(page.filters.status, StatusFilter::Inactive);
    assert_eq!(page.filters.entity, "bank");
    assert!(page.items.is_empty());
}
