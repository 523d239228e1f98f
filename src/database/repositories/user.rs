//! User repository implementation

use std::time::Instant;

use sqlx::PgPool;
use tracing::error;
use crate::models::user::{User, CreateUserRequest};
use crate::utils::errors::LightBnbError;
use crate::utils::logging::log_database_operation;

#[derive(Clone)]
#[derive(Debug)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user, returning it with its assigned id
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, LightBnbError> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.password)
        .fetch_one(&self.pool)
        .await;

        log_database_operation("create", "users", started.elapsed().as_millis() as u64, result.is_ok());
        result.map_err(|e| {
            error!(email = %request.email, error = %e, "Failed to insert user");
            e.into()
        })
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, LightBnbError> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM users WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        log_database_operation("find_by_id", "users", started.elapsed().as_millis() as u64, result.is_ok());
        result.map_err(|e| {
            error!(user_id = id, error = %e, "Failed to load user");
            e.into()
        })
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, LightBnbError> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM users WHERE email = $1"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;

        log_database_operation("find_by_email", "users", started.elapsed().as_millis() as u64, result.is_ok());
        result.map_err(|e| {
            error!(email = email, error = %e, "Failed to load user");
            e.into()
        })
    }
}
