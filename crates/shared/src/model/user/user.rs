use chrono::{DateTime, Utc};
use exemplar::Model;
use rusqlite::{Connection, OptionalExtension};
use sea_query::{enum_def, Expr, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use crate::{model::NewUser, types::Uuid};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("user")]
#[check("../../../../server/migrations/001-user/up.sql")]
#[enum_def]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub creation_date: DateTime<Utc>,
}

impl User {
    fn select_all() -> SelectStatement {
        Query::select()
            .columns([UserIden::Id, UserIden::Username, UserIden::CreationDate])
            .from(UserIden::Table)
            .take()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<User, rusqlite::Error> {
        let (sql, values) = Self::select_all()
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row)?;
        Ok(user)
    }

    /// Like `fetch_by_id` but absence is not an error
    pub fn fetch_maybe(conn: &Connection, id: &Uuid) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select_all()
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt
            .query_row(&*values.as_params(), User::from_row)
            .optional()?;
        Ok(user)
    }

    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, rusqlite::Error> {
        let (sql, values) = Self::select_all().build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(users)
    }

    pub fn create(conn: &mut Connection, new_user: NewUser) -> Result<User, rusqlite::Error> {
        let tx = conn.transaction()?;
        let user = {
            new_user.insert(&tx)?;
            User::fetch_by_id(&tx, &new_user.id)?
        };
        tx.commit()?;

        Ok(user)
    }
}
