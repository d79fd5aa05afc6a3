use crate::models::validation::ensure_valid;
use crate::models::{
    ConfirmOutcome, FilterUpdate, OperationKind, PaginationUpdate, Panel, ServiceError, TeamInput, TeamSort,
};
use crate::services::team_workflow::TeamWorkflow;
use actix_web::{delete, get, post, put, web, HttpResponse};
use log::{error, info};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, Debug)]
pub struct PanelQuery {
    pub team_id: Option<String>,
}

// Current page of the table plus workflow flags
#[get("/teams")]
async fn get_teams(workflow: web::Data<TeamWorkflow>) -> Result<HttpResponse, ServiceError> {
    let snapshot = workflow.snapshot()?;

    info!("📋 Serving page {} of {} ({} teams)",
        snapshot.view.pagination.page,
        snapshot.view.pagination.total_pages,
        snapshot.view.pagination.total_items);

    Ok(HttpResponse::Ok().json(snapshot))
}

#[put("/teams/filters")]
async fn set_filters(
    workflow: web::Data<TeamWorkflow>,
    filters: web::Json<FilterUpdate>,
) -> Result<HttpResponse, ServiceError> {
    info!("🔍 Updating filters: {:?}", filters);
    let page = workflow.set_filters(filters.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[put("/teams/sort")]
async fn set_sort(workflow: web::Data<TeamWorkflow>, sort: web::Json<TeamSort>) -> Result<HttpResponse, ServiceError> {
    info!("🔃 Sorting by {} {}", sort.field, sort.direction);
    let page = workflow.set_sort(sort.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[put("/teams/pagination")]
async fn set_pagination(
    workflow: web::Data<TeamWorkflow>,
    update: web::Json<PaginationUpdate>,
) -> Result<HttpResponse, ServiceError> {
    let page = workflow.set_pagination(update.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

// Stage a new team; it is only created once confirmed
#[post("/teams/workflows/create")]
async fn stage_create(
    workflow: web::Data<TeamWorkflow>,
    input: web::Json<TeamInput>,
) -> Result<HttpResponse, ServiceError> {
    let input = input.into_inner();
    ensure_valid(&input).map_err(|e| {
        error!("❌ Rejected create payload: {}", e);
        e
    })?;

    let pending = workflow.stage_create(input)?;
    Ok(HttpResponse::Ok().json(pending))
}

#[post("/teams/{team_id}/workflows/edit")]
async fn stage_edit(
    workflow: web::Data<TeamWorkflow>,
    path: web::Path<String>,
    input: web::Json<TeamInput>,
) -> Result<HttpResponse, ServiceError> {
    let team_id = path.into_inner();
    let input = input.into_inner();
    ensure_valid(&input).map_err(|e| {
        error!("❌ Rejected edit payload for team {}: {}", team_id, e);
        e
    })?;

    let pending = workflow.stage_edit(&team_id, input)?;
    Ok(HttpResponse::Ok().json(pending))
}

#[post("/teams/{team_id}/workflows/delete")]
async fn request_delete(
    workflow: web::Data<TeamWorkflow>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let team_id = path.into_inner();
    let pending = workflow.request_delete(&team_id)?;
    Ok(HttpResponse::Ok().json(pending))
}

#[post("/teams/workflows/{kind}/confirm")]
async fn confirm(workflow: web::Data<TeamWorkflow>, path: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let kind: OperationKind = path.into_inner().parse()?;

    let outcome = workflow.confirm(kind).await?;
    let response = match &outcome {
        ConfirmOutcome::Committed { .. } => HttpResponse::Ok().json(&outcome),
        ConfirmOutcome::Failed { .. } => HttpResponse::Conflict().json(&outcome),
        ConfirmOutcome::Ignored => HttpResponse::Accepted().json(&outcome),
        ConfirmOutcome::NothingStaged => HttpResponse::BadRequest().json(&outcome),
    };

    Ok(response)
}

#[delete("/teams/workflows/{kind}")]
async fn cancel(workflow: web::Data<TeamWorkflow>, path: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let kind: OperationKind = path.into_inner().parse()?;
    let cancelled = workflow.cancel(kind)?;

    Ok(HttpResponse::Ok().json(json!({
        "kind": kind,
        "cancelled": cancelled
    })))
}

#[post("/teams/panels/{panel}/open")]
async fn open_panel(
    workflow: web::Data<TeamWorkflow>,
    path: web::Path<String>,
    query: web::Query<PanelQuery>,
) -> Result<HttpResponse, ServiceError> {
    let panel: Panel = path.into_inner().parse()?;
    let snapshot = workflow.open_panel(panel, query.team_id.as_deref())?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/teams/panels/{panel}/close")]
async fn close_panel(workflow: web::Data<TeamWorkflow>, path: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let panel: Panel = path.into_inner().parse()?;
    let snapshot = workflow.close_panel(panel)?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[delete("/teams/error")]
async fn reset_error(workflow: web::Data<TeamWorkflow>) -> Result<HttpResponse, ServiceError> {
    workflow.reset_error()?;
    Ok(HttpResponse::NoContent().finish())
}

// Pop the last success message, if any
#[delete("/teams/notification")]
async fn take_notification(workflow: web::Data<TeamWorkflow>) -> Result<HttpResponse, ServiceError> {
    let notification = workflow.take_notification()?;
    Ok(HttpResponse::Ok().json(json!({ "notification": notification })))
}

// Register all team routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_teams)
        .service(set_filters)
        .service(set_sort)
        .service(set_pagination)
        .service(stage_create)
        .service(stage_edit)
        .service(request_delete)
        .service(confirm)
        .service(cancel)
        .service(open_panel)
        .service(close_panel)
        .service(reset_error)
        .service(take_notification);
}
