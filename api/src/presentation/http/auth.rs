use crate::application::ports::user_repository::UserRow;
use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::me::GetMe;
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterError, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::presentation::http::error::ApiError;
use axum::{
    Form, Json, Router,
    extract::State,
    routing::{get, post},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "Invalid Credentials";
const INVALID_TOKEN: &str = "Invalid Email or Password";

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    #[serde(alias = "hashed_password")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
}

/// OAuth2 password grant; `username` carries the email.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub grant_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/me", get(me))
        .route("/token", post(generate_token))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/users", tag = "Auth", request_body = RegisterRequest, security(()), responses(
    (status = 200, body = TokenResponse),
    (status = 400, body = ErrorBody, description = "Email already in use or invalid input")
))]
pub async fn create_user(
    State(ctx): State<AppContext>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = RegisterUc {
        repo: repo.as_ref(),
    };
    let dto = RegisterDto {
        email: req.email,
        password: req.password,
    };
    let user = uc.execute(&dto).await.map_err(|e| match e {
        e @ RegisterError::EmailTaken => ApiError::BadRequest(e.to_string()),
        RegisterError::Invalid(msg) => ApiError::BadRequest(msg.to_string()),
        RegisterError::Other(err) => ApiError::Internal(err),
    })?;
    Ok(Json(token_response(&ctx.cfg, &user)?))
}

#[utoipa::path(post, path = "/api/token", tag = "Auth",
    request_body(content = TokenForm, content_type = "application/x-www-form-urlencoded"),
    security(()),
    responses(
        (status = 200, body = TokenResponse),
        (status = 401, body = ErrorBody, description = "Invalid Credentials")
    ))]
pub async fn generate_token(
    State(ctx): State<AppContext>,
    Form(form): Form<TokenForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    if let Some(grant) = form.grant_type.as_deref() {
        if grant != "password" {
            return Err(ApiError::BadRequest("unsupported_grant_type".into()));
        }
    }
    let repo = ctx.user_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
    };
    let dto = LoginDto {
        email: form.username,
        password: form.password,
    };
    let user = uc
        .execute(&dto)
        .await?
        .ok_or(ApiError::Unauthorized(INVALID_CREDENTIALS))?;
    Ok(Json(token_response(&ctx.cfg, &user)?))
}

#[utoipa::path(get, path = "/api/users/me", tag = "Auth", responses(
    (status = 200, body = UserResponse),
    (status = 401, body = ErrorBody)
))]
pub async fn me(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.id,
        email: user.email,
    })
}

// --- JWT utils ---

pub fn issue_token(cfg: &Config, user: &UserRow) -> anyhow::Result<String> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        iat: now,
        exp: now + (cfg.jwt_expires_secs.max(0) as usize),
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret_pem.as_bytes()),
    )?;
    Ok(token)
}

fn token_response(cfg: &Config, user: &UserRow) -> anyhow::Result<TokenResponse> {
    Ok(TokenResponse {
        access_token: issue_token(cfg, user)?,
        token_type: "bearer".into(),
    })
}

pub fn validate_bearer(cfg: &Config, token: &str) -> anyhow::Result<Claims> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.jwt_secret_pem.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

// --- Bearer & current-user extractors ---
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized(INVALID_TOKEN))?;
        let token = auth
            .split_once(' ')
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, t)| t.trim())
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::Unauthorized(INVALID_TOKEN))?;
        Ok(Bearer(token.to_string()))
    }
}

/// The user behind a valid bearer token, re-loaded from storage on every request.
pub struct AuthUser(pub UserRow);

#[axum::async_trait]
impl FromRequestParts<AppContext> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let Bearer(token) = Bearer::from_request_parts(parts, ctx).await?;
        let claims =
            validate_bearer(&ctx.cfg, &token).map_err(|_| ApiError::Unauthorized(INVALID_TOKEN))?;
        let id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized(INVALID_TOKEN))?;
        let repo = ctx.user_repo();
        let uc = GetMe {
            repo: repo.as_ref(),
        };
        let user = uc
            .execute(id)
            .await?
            .ok_or(ApiError::Unauthorized(INVALID_TOKEN))?;
        Ok(AuthUser(user))
    }
}
