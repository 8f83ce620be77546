use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use chms_backend::{
    config::Config,
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    models::{ServeMode, SystemStatus},
    repositories::Repositories,
    services::*,
    storage::{FileStorage, StateStorage},
    swagger::swagger_config,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration file");

    // Serve mode is decided once here; every repository behind Repositories
    // points at the same backend for the life of the process.
    let repositories = Repositories::from_config(&config.store);
    match repositories.mode {
        ServeMode::Remote => log::info!("Remote store configured; serving live data"),
        ServeMode::Demo => log::info!("No remote store configured; serving demo data"),
    }

    let storage: Arc<dyn StateStorage> = Arc::new(FileStorage::new(&config.storage.path));

    let jwt_service = JwtService::new(&config.session.secret, config.session.expires_in);

    let auth_service = AuthService::new(&config.store, jwt_service.clone(), storage.clone());
    let member_service = MemberService::new(repositories.members.clone());
    let visitor_service = VisitorService::new(repositories.visitors.clone());
    let attendance_service = AttendanceService::new(
        repositories.attendance.clone(),
        repositories.members.clone(),
    );
    let donation_service = DonationService::new(repositories.donations.clone(), &config.church.name);
    let event_service = EventService::new();
    let dashboard_service = DashboardService::new(repositories.clone(), event_service.clone());
    let profile_service = ProfileService::new(storage.clone());
    let certificate_service = CertificateService::new(
        repositories.members.clone(),
        profile_service.clone(),
        &config.church.name,
    );
    let photo_service = PhotoService::new(repositories.members.clone(), &config.church.name);

    let system_status = SystemStatus {
        mode: repositories.mode,
        church_name: config.church.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(member_service.clone()))
            .app_data(web::Data::new(visitor_service.clone()))
            .app_data(web::Data::new(attendance_service.clone()))
            .app_data(web::Data::new(donation_service.clone()))
            .app_data(web::Data::new(event_service.clone()))
            .app_data(web::Data::new(dashboard_service.clone()))
            .app_data(web::Data::new(profile_service.clone()))
            .app_data(web::Data::new(certificate_service.clone()))
            .app_data(web::Data::new(photo_service.clone()))
            .app_data(web::Data::new(system_status.clone()))
            .configure(swagger_config)
            .configure(handlers::health_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::auth_config)
                    .configure(handlers::system_config)
                    .configure(handlers::dashboard_config)
                    .configure(handlers::member_config)
                    .configure(handlers::visitor_config)
                    .configure(handlers::attendance_config)
                    .configure(handlers::donation_config)
                    .configure(handlers::event_config)
                    .configure(handlers::certificate_config)
                    .configure(handlers::photo_config)
                    .configure(handlers::profile_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
