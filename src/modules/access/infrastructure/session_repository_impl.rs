use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use super::models::UserModel;
use crate::modules::access::domain::{Caller, SessionRepository};
use crate::schema::{auth_tokens, homework_teachers, users};
use crate::shared::errors::AppResult;
use crate::shared::{Database, SharedDatabaseState};

pub struct SessionRepositoryImpl {
    db_state: SharedDatabaseState,
}

impl SessionRepositoryImpl {
    pub fn new(db_state: SharedDatabaseState) -> Self {
        Self { db_state }
    }

    async fn database(&self) -> AppResult<Arc<Database>> {
        self.db_state.read().await.get_database()
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn find_caller_by_token(&self, token: &str) -> AppResult<Option<Caller>> {
        let db = self.database().await?;
        let token = token.to_string();

        task::spawn_blocking(move || -> AppResult<Option<Caller>> {
            let mut conn = db.get_connection()?;

            let user = auth_tokens::table
                .inner_join(users::table)
                .filter(auth_tokens::key.eq(token.as_str()))
                .select(UserModel::as_select())
                .first::<UserModel>(&mut conn)
                .optional()?;

            let Some(user) = user else {
                return Ok(None);
            };

            let has_teacher_profile: bool = diesel::select(diesel::dsl::exists(
                homework_teachers::table.filter(homework_teachers::user_id.eq(user.id)),
            ))
            .get_result(&mut conn)?;

            Ok(Some(Caller {
                user_id: user.id,
                first_name: user.first_name,
                last_name: user.last_name,
                role: user.role,
                is_active: user.is_active,
                has_teacher_profile,
            }))
        })
        .await?
    }
}
