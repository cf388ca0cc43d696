use sqlx::PgConnection;

#[derive(Debug)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

pub async fn does_email_exist(conn: &mut PgConnection, email: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("SELECT 1 FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(result.is_some())
}

pub async fn does_phone_exist(conn: &mut PgConnection, phone: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("SELECT 1 FROM users WHERE phone = $1")
        .bind(phone)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(result.is_some())
}

/// Inserts the user and returns the generated id.
pub async fn create_user(conn: &mut PgConnection, user: &NewUser) -> Result<i32, sqlx::Error> {
    let row: (i32,) = sqlx::query_as(
        r#"
        INSERT INTO users (full_name, email, phone, password_hash)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&user.full_name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(&user.password_hash)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row.0)
}
