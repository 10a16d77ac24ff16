//! User record queries

use directory_core::{
    error::{DirectoryError, Result},
    types::{NewUser, User, UserFilter, UserId},
};
use sqlx::{sqlite::SqliteRow, QueryBuilder, Row, Sqlite, SqlitePool};

fn from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Insert a new user
///
/// A collision on `name` or `email` is reported as `DirectoryError::Duplicate`
/// straight from the table's unique constraints.
pub async fn create(pool: &SqlitePool, user: NewUser) -> Result<User> {
    let row = sqlx::query(
        "INSERT INTO users (name, email) VALUES (?, ?)
         RETURNING id, name, email",
    )
    .bind(&user.name)
    .bind(&user.email)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            DirectoryError::duplicate()
        } else {
            e.into()
        }
    })?;

    from_row(&row)
}

/// List users whose name and email contain the filter substrings
///
/// Matching is case-sensitive. Results come back in insertion order.
pub async fn list(pool: &SqlitePool, filter: &UserFilter) -> Result<Vec<User>> {
    let mut query = QueryBuilder::<Sqlite>::new("SELECT id, name, email FROM users");
    let mut keyword = " WHERE ";

    if let Some(name) = filter.name() {
        query.push(keyword).push("instr(name, ").push_bind(name).push(") > 0");
        keyword = " AND ";
    }
    if let Some(email) = filter.email() {
        query.push(keyword).push("instr(email, ").push_bind(email).push(") > 0");
    }
    query.push(" ORDER BY id");

    let rows = query.build().fetch_all(pool).await?;
    rows.iter().map(from_row).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, email FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Overwrite both fields of an existing user
///
/// Uniqueness is left to the table constraints; a collision with another
/// record comes back as a plain database error.
pub async fn update(pool: &SqlitePool, id: UserId, user: NewUser) -> Result<User> {
    let row = sqlx::query(
        "UPDATE users SET name = ?, email = ? WHERE id = ?
         RETURNING id, name, email",
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DirectoryError::UserNotFound(id))?;

    from_row(&row)
}

pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DirectoryError::UserNotFound(id));
    }

    Ok(())
}
