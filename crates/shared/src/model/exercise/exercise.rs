use chrono::NaiveDate;
use exemplar::Model;
use rusqlite::Connection;
use sea_query::{enum_def, Expr, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use crate::{
    model::{LogFilter, NewExercise},
    types::Uuid,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("exercise")]
#[check("../../../../server/migrations/002-exercise/up.sql")]
#[enum_def]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl Exercise {
    fn select_all() -> SelectStatement {
        Query::select()
            .columns([
                ExerciseIden::Id,
                ExerciseIden::UserId,
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
            ])
            .from(ExerciseIden::Table)
            .take()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Exercise, rusqlite::Error> {
        let (sql, values) = Self::select_all()
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let exercise = stmt.query_row(&*values.as_params(), Exercise::from_row)?;
        Ok(exercise)
    }

    /// A user's log, windowed and capped by the filter. No ordering is
    /// applied; entries come back in insertion order.
    pub fn fetch_log(
        conn: &Connection,
        user_id: &Uuid,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        let mut query = Self::select_all();
        query.and_where(Expr::col(ExerciseIden::UserId).eq(user_id));
        filter.apply(&mut query);

        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let exercises = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(exercises)
    }

    pub fn create(
        conn: &mut Connection,
        new_exercise: NewExercise,
    ) -> Result<Exercise, rusqlite::Error> {
        let tx = conn.transaction()?;
        let exercise = {
            new_exercise.insert(&tx)?;
            Exercise::fetch_by_id(&tx, &new_exercise.id)?
        };
        tx.commit()?;

        Ok(exercise)
    }
}
