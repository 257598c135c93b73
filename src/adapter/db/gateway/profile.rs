use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewProfile, Profile};

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_profile(row: &PgRow) -> AppResult<Profile> {
        Ok(Profile {
            id: Id::new(row.try_get("id")?),
            gender: row.try_get("gender")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            location: row.try_get("location")?,
            photo: row.try_get("photo")?,
        })
    }

    fn find_profile(result: Option<PgRow>) -> AppResult<Option<Profile>> {
        result.as_ref().map(Self::map_profile).transpose()
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: NewProfile) -> AppResult<Id<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let row = sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (gender, first_name, last_name, phone, email, location, photo)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(profile.gender)
                    .bind(profile.first_name)
                    .bind(profile.last_name)
                    .bind(profile.phone)
                    .bind(profile.email)
                    .bind(profile.location)
                    .bind(profile.photo)
                    .fetch_one(tx.as_mut())
                    .await?;

                    let id: i64 = row.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn count(&self) -> AppResult<i64> {
        self.session
            .with_tx(|tx| {
                async move {
                    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
                        .fetch_one(tx.as_mut())
                        .await?;
                    Ok(total)
                }
                .boxed()
            })
            .await
    }

    async fn get_all(&self, limit: i64, offset: i64) -> AppResult<Vec<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, gender, first_name, last_name, phone, email, location, photo
                            FROM
                                profiles
                            ORDER BY id DESC
                            LIMIT $1 OFFSET $2
                        "#,
                    )
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::map_profile).collect()
                }
                .boxed()
            })
            .await
    }

    async fn find_by_id(&self, profile_id: &Id<Profile>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let profile_id = profile_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, gender, first_name, last_name, phone, email, location, photo
                            FROM
                                profiles
                            WHERE id = $1
                        "#,
                    )
                    .bind(profile_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_profile(result)
                }
                .boxed()
            })
            .await
    }

    async fn find_at_offset(&self, offset: i64) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    // No ORDER BY: the pick is an offset into the table's natural order.
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, gender, first_name, last_name, phone, email, location, photo
                            FROM
                                profiles
                            OFFSET $1
                            LIMIT 1
                        "#,
                    )
                    .bind(offset)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_profile(result)
                }
                .boxed()
            })
            .await
    }

    async fn first(&self) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, gender, first_name, last_name, phone, email, location, photo
                            FROM
                                profiles
                            ORDER BY id ASC
                            LIMIT 1
                        "#,
                    )
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_profile(result)
                }
                .boxed()
            })
            .await
    }
}
