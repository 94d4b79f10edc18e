use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::infrastructure::crypto;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    /// Ok(None) for an unknown email or a wrong password.
    pub async fn execute(&self, req: &LoginRequest) -> anyhow::Result<Option<UserRow>> {
        let row = match self.repo.find_by_email(req.email.trim()).await? {
            Some(r) => r,
            None => return Ok(None),
        };
        let hash = row.password_hash.clone().unwrap_or_default();
        if crypto::verify_password(&req.password, &hash) {
            Ok(Some(UserRow {
                id: row.id,
                email: row.email,
                password_hash: None,
            }))
        } else {
            Ok(None)
        }
    }
}
