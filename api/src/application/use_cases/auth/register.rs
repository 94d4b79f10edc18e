use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::infrastructure::crypto;

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Email already in use")]
    EmailTaken,
    #[error("{0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> Result<UserRow, RegisterError> {
        let email = req.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(RegisterError::Invalid("A valid email is required"));
        }
        if req.password.is_empty() {
            return Err(RegisterError::Invalid("Password must not be empty"));
        }
        if self.repo.find_by_email(email).await?.is_some() {
            return Err(RegisterError::EmailTaken);
        }
        let hash = crypto::hash_password(&req.password)?;
        // A concurrent registration can still win the race; the unique constraint reports it as None.
        let user = self
            .repo
            .create_user(email, &hash)
            .await?
            .ok_or(RegisterError::EmailTaken)?;
        tracing::info!(user_id = %user.id, "user_registered");
        Ok(UserRow {
            id: user.id,
            email: user.email,
            password_hash: None,
        })
    }
}
