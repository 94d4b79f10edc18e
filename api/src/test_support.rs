use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use crate::application::ports::lead_repository::LeadRepository;
use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::bootstrap::app_context::{AppContext, AppServices};
use crate::bootstrap::config::Config;
use crate::domain::leads::lead::{Lead, LeadFields};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserRow>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<Option<UserRow>> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Ok(None);
        }
        let row = UserRow {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: Some(password_hash.to_string()),
        };
        users.push(row.clone());
        Ok(Some(row))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRow>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).map(|u| UserRow {
            id: u.id,
            email: u.email.clone(),
            password_hash: None,
        }))
    }
}

#[derive(Default)]
pub struct InMemoryLeadRepository {
    leads: Mutex<Vec<Lead>>,
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn create_for_owner(&self, owner_id: Uuid, fields: &LeadFields) -> anyhow::Result<Lead> {
        let now = chrono::Utc::now();
        let lead = Lead {
            id: Uuid::new_v4(),
            owner_id,
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
            company: fields.company.clone(),
            note: fields.note.clone(),
            date_created: now,
            date_last_updated: now,
        };
        self.leads.lock().unwrap().push(lead.clone());
        Ok(lead)
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Lead>> {
        let leads = self.leads.lock().unwrap();
        Ok(leads
            .iter()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn get_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Lead>> {
        let leads = self.leads.lock().unwrap();
        Ok(leads
            .iter()
            .find(|l| l.id == id && l.owner_id == owner_id)
            .cloned())
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        fields: &LeadFields,
    ) -> anyhow::Result<Option<Lead>> {
        let mut leads = self.leads.lock().unwrap();
        let Some(lead) = leads
            .iter_mut()
            .find(|l| l.id == id && l.owner_id == owner_id)
        else {
            return Ok(None);
        };
        lead.first_name = fields.first_name.clone();
        lead.last_name = fields.last_name.clone();
        lead.email = fields.email.clone();
        lead.company = fields.company.clone();
        lead.note = fields.note.clone();
        lead.date_last_updated = chrono::Utc::now();
        Ok(Some(lead.clone()))
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        let mut leads = self.leads.lock().unwrap();
        let before = leads.len();
        leads.retain(|l| !(l.id == id && l.owner_id == owner_id));
        Ok(leads.len() < before)
    }
}

pub fn lead_fields(first_name: &str) -> LeadFields {
    LeadFields {
        first_name: first_name.to_string(),
        last_name: "Lovelace".into(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        company: "Babbage & Co".into(),
        note: String::new(),
    }
}

pub fn test_config() -> Config {
    Config {
        api_port: 0,
        frontend_url: None,
        database_url: "postgres://unused".into(),
        database_max_connections: 1,
        jwt_secret_pem: "test-secret-for-unit-tests-only".into(),
        jwt_expires_secs: 300,
        is_production: false,
    }
}

pub fn test_context() -> AppContext {
    let services = AppServices::new(
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(InMemoryLeadRepository::default()),
    );
    AppContext::new(test_config(), services)
}

// --- HTTP helpers for router tests ---

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Empty bodies come back as `Value::Null`.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Registers a user through the API and returns its bearer token.
pub async fn register(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/users",
            None,
            Some(serde_json::json!({"email": email, "password": password})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "registration failed: {body}");
    body["access_token"].as_str().unwrap().to_string()
}
