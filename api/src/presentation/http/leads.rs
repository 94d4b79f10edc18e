use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::leads::create_lead::CreateLead;
use crate::application::use_cases::leads::delete_lead::DeleteLead;
use crate::application::use_cases::leads::get_lead::GetLead;
use crate::application::use_cases::leads::list_leads::ListLeads;
use crate::application::use_cases::leads::update_lead::UpdateLead;
use crate::bootstrap::app_context::AppContext;
use crate::domain::leads::lead as domain;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::ApiError;

const LEAD_NOT_FOUND: &str = "Lead does not exist";

#[derive(Debug, Serialize, ToSchema)]
pub struct Lead {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub note: String,
    pub date_created: chrono::DateTime<chrono::Utc>,
    pub date_last_updated: chrono::DateTime<chrono::Utc>,
}

impl From<domain::Lead> for Lead {
    fn from(l: domain::Lead) -> Self {
        Lead {
            id: l.id,
            owner_id: l.owner_id,
            first_name: l.first_name,
            last_name: l.last_name,
            email: l.email,
            company: l.company,
            note: l.note,
            date_created: l.date_created,
            date_last_updated: l.date_last_updated,
        }
    }
}

/// Body for both create and update; update replaces every field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LeadRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub note: String,
}

impl From<LeadRequest> for domain::LeadFields {
    fn from(r: LeadRequest) -> Self {
        domain::LeadFields {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            company: r.company,
            note: r.note,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/leads", get(list_leads).post(create_lead))
        .route(
            "/leads/:id",
            get(get_lead).put(update_lead).delete(delete_lead),
        )
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/leads", tag = "Leads", request_body = LeadRequest, responses(
    (status = 200, body = Lead),
    (status = 401, body = ErrorBody)
))]
pub async fn create_lead(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Json(req): Json<LeadRequest>,
) -> Result<Json<Lead>, ApiError> {
    let repo = ctx.lead_repo();
    let uc = CreateLead {
        repo: repo.as_ref(),
    };
    let lead = uc.execute(user.id, &req.into()).await?;
    Ok(Json(lead.into()))
}

#[utoipa::path(get, path = "/api/leads", tag = "Leads", responses(
    (status = 200, body = [Lead]),
    (status = 401, body = ErrorBody)
))]
pub async fn list_leads(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Lead>>, ApiError> {
    let repo = ctx.lead_repo();
    let uc = ListLeads {
        repo: repo.as_ref(),
    };
    let leads = uc.execute(user.id).await?;
    Ok(Json(leads.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/leads/{id}", tag = "Leads",
    params(("id" = Uuid, Path, description = "Lead ID")),
    responses(
        (status = 200, body = Lead),
        (status = 401, body = ErrorBody),
        (status = 404, body = ErrorBody, description = "Lead does not exist")
    ))]
pub async fn get_lead(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Lead>, ApiError> {
    let repo = ctx.lead_repo();
    let uc = GetLead {
        repo: repo.as_ref(),
    };
    let lead = uc
        .execute(id, user.id)
        .await?
        .ok_or(ApiError::NotFound(LEAD_NOT_FOUND))?;
    Ok(Json(lead.into()))
}

#[utoipa::path(put, path = "/api/leads/{id}", tag = "Leads", request_body = LeadRequest,
    params(("id" = Uuid, Path, description = "Lead ID")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorBody),
        (status = 404, body = ErrorBody, description = "Lead does not exist")
    ))]
pub async fn update_lead(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<LeadRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ctx.lead_repo();
    let uc = UpdateLead {
        repo: repo.as_ref(),
    };
    uc.execute(id, user.id, &req.into())
        .await?
        .ok_or(ApiError::NotFound(LEAD_NOT_FOUND))?;
    Ok(Json(MessageResponse {
        message: "Successfully Updated".into(),
    }))
}

#[utoipa::path(delete, path = "/api/leads/{id}", tag = "Leads",
    params(("id" = Uuid, Path, description = "Lead ID")),
    responses(
        (status = 204),
        (status = 401, body = ErrorBody),
        (status = 404, body = ErrorBody, description = "Lead does not exist")
    ))]
pub async fn delete_lead(
    State(ctx): State<AppContext>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = ctx.lead_repo();
    let uc = DeleteLead {
        repo: repo.as_ref(),
    };
    if uc.execute(id, user.id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(LEAD_NOT_FOUND))
    }
}
