use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::{error, info};

use fleetlink_backend::config::environment::EnvironmentConfig;
use fleetlink_backend::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use fleetlink_backend::routes::create_api_router;
use fleetlink_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let level = if config.is_production() {
        tracing::Level::INFO
    } else {
        tracing::Level::DEBUG
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚚 FleetLink - Motor de disponibilidad y reservas de flota");
    info!("==========================================================");

    // CORS: permisivo en desarrollo, orígenes explícitos en producción
    let cors = if config.is_development() || config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(config);

    // Crear router de la API
    let app = create_api_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET   /api/health - Health check");
    info!("🚛 Flota:");
    info!("   POST  /api/vehicles - Registrar vehículo");
    info!("   GET   /api/vehicles - Listar flota");
    info!("   GET   /api/vehicles/available - Buscar vehículos disponibles");
    info!("   GET   /api/vehicles/:id - Obtener vehículo");
    info!("📋 Reservas:");
    info!("   POST  /api/bookings - Crear reserva");
    info!("   GET   /api/bookings - Listar reservas");
    info!("   GET   /api/bookings/:id - Obtener reserva");
    info!("   PATCH /api/bookings/:id/status - Actualizar estado de reserva");
    info!("📊 Dashboard:");
    info!("   GET   /api/dashboard/stats - Estadísticas de flota");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
