pub mod api;
pub mod health;
pub mod modules;
pub mod seed;
pub mod shared;

use crate::modules::about::{
    adapter::outgoing::AboutQueryPostgres,
    application::{ports::incoming::use_cases::GetAboutUseCase, services::GetAboutService},
};
use crate::modules::contact::{
    adapter::outgoing::ContactRepositoryPostgres,
    application::{
        ports::incoming::use_cases::SubmitContactUseCase, services::SubmitContactService,
    },
};
use crate::modules::download::{
    adapter::outgoing::ResumeStoreLocal,
    application::{
        ports::incoming::use_cases::DownloadResumeUseCase, services::DownloadResumeService,
    },
};
use crate::modules::project::{
    adapter::outgoing::ProjectQueryPostgres,
    application::{
        project_use_cases::ProjectUseCases,
        services::{GetProjectByIdService, GetProjectsService},
    },
};
use crate::modules::skill::{
    adapter::outgoing::SkillQueryPostgres,
    application::{ports::incoming::use_cases::GetSkillsUseCase, services::GetSkillsService},
};
use crate::shared::api::{custom_json_config, not_found_handler};
use crate::shared::config::AppConfig;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_about_use_case: Arc<dyn GetAboutUseCase + Send + Sync>,
    pub project: ProjectUseCases,
    pub get_skills_use_case: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub submit_contact_use_case: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub download_resume_use_case: Arc<dyn DownloadResumeUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(environment = %config.environment, "Configuration loaded");
    if config.cors_open_in_production() {
        warn!("CLIENT_URL is not set in production; CORS allows any origin");
    }

    let db = connect_database(&config).await?;

    Migrator::up(&db, None)
        .await
        .context("Failed to apply database migrations")?;

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("seed") => {
            let path = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| config.seed_file.clone());
            return run_seed(&db, path).await;
        }
        Some(other) => anyhow::bail!("Unknown command: {other} (expected `seed` or nothing)"),
        None => {}
    }

    serve(config, db).await
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(config: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    Database::connect(opt)
        .await
        .context("Failed to connect to database")
}

#[cfg(not(tarpaulin_include))]
async fn run_seed(db: &DatabaseConnection, path: PathBuf) -> anyhow::Result<()> {
    info!(path = %path.display(), "Starting database seeding...");

    let doc = seed::load_seed_file(&path).await?;
    let summary = seed::apply_seed(db, &doc).await?;

    info!(
        projects = summary.projects,
        skills = summary.skills,
        "Database seeded successfully"
    );
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn serve(config: AppConfig, db: DatabaseConnection) -> anyhow::Result<()> {
    let db_arc = Arc::new(db);

    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        get_about_use_case: Arc::new(GetAboutService::new(AboutQueryPostgres::new(Arc::clone(
            &db_arc,
        )))),
        project: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_query.clone())),
            get_single: Arc::new(GetProjectByIdService::new(project_query)),
        },
        get_skills_use_case: Arc::new(GetSkillsService::new(SkillQueryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        submit_contact_use_case: Arc::new(SubmitContactService::new(
            ContactRepositoryPostgres::new(Arc::clone(&db_arc)),
        )),
        download_resume_use_case: Arc::new(DownloadResumeService::new(ResumeStoreLocal::new(
            config.resume_path.clone(),
            config.resume_download_name.clone(),
        ))),
    };

    let server_url = config.server_url();
    info!(url = %server_url, "Server listening");

    let openapi = api::openapi::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(build_cors(&config))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(Files::new("/uploads", config.public_dir.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .default_service(web::route().to(not_found_handler))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

/// Any origin when `CLIENT_URL` is unset; otherwise only that origin, with
/// credentials.
fn build_cors(config: &AppConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .expose_headers(vec![
            header::CONTENT_DISPOSITION,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    match &config.client_url {
        Some(origin) => cors.allowed_origin(origin).supports_credentials(),
        None => cors.allow_any_origin(),
    }
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // About
    cfg.service(crate::modules::about::adapter::incoming::web::routes::get_about_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(
        crate::modules::project::adapter::incoming::web::routes::get_project_by_id_handler,
    );
    // Skills
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::get_skills_handler);
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler);
    // Download
    cfg.service(
        crate::modules::download::adapter::incoming::web::routes::download_resume_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!(error = ?e, "Application exited with an error");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
