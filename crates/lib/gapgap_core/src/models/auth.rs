//! Authentication domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Public user profile. Never carries the password digest.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub subscription_plan: String,
    pub created_at: DateTime<Utc>,
}
