use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

mod databases;
mod errors;
mod routes;
mod services;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let pool = databases::setup_backend().await?;

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    println!("✅ Listening on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(Cors::permissive())
            .service(web::scope("/api/auth").configure(routes::sign_up::init))
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
