use golfbank::api;
use golfbank::config::Config;
use golfbank::datasource::{load_player_names, CourseSource, CsvCourseDb};
use golfbank::db::{init_db, Repository};
use golfbank::orchestration::Resettler;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let port = config.port;

    // Initialize database and dependencies
    let pool = match init_db(&config.database_path).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let courses: Arc<dyn CourseSource> = match CsvCourseDb::load(&config.course_db_path) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            eprintln!("Failed to load course database: {}", e);
            std::process::exit(1);
        }
    };

    let registry = match &config.players_csv_path {
        Some(path) => match load_player_names(path) {
            Ok(names) => Arc::new(names),
            Err(e) => {
                eprintln!("Failed to load player registry: {}", e);
                std::process::exit(1);
            }
        },
        None => Arc::new(Vec::new()),
    };

    let repo = Arc::new(Repository::new(pool));
    let resettler = Arc::new(Resettler::new(repo.clone()));

    // Create router
    let app = api::create_router(api::AppState::new(
        repo,
        config,
        courses,
        resettler,
        registry,
    ));

    // Bind to address
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
