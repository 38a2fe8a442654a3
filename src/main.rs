#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use opentelemetry_configuration::OtelSdkBuilder;
    use portfolio::app::*;
    use portfolio::config::{BindTarget, Config};
    use portfolio::error::AppError;
    use tower::ServiceBuilder;
    use tower_http::compression::CompressionLayer;

    let config = Config::load().context("failed to load configuration")?;

    let _guard = OtelSdkBuilder::new()
        .service_name(env!("CARGO_PKG_NAME"))
        .service_version(env!("CARGO_PKG_VERSION"))
        .resource_attribute("vcs.repository.url.full", "https://github.com/latticeghost/portfolio")
        .resource_attribute("vcs.repository.name", env!("CARGO_PKG_NAME"))
        .resource_attribute("vcs.ref.head.revision", env!("VCS_REF_HEAD_REVISION"))
        .resource_attribute("vcs.ref.head.name", env!("VCS_REF_HEAD_NAME"))
        .resource_attribute("vcs.ref.head.type", "branch")
        .resource_attribute("deployment.environment.name", config.otel.environment.clone())
        .endpoint(config.otel.endpoint.as_str())
        .with_standard_env()
        .build()
        .map_err(|e| AppError::Telemetry(e.into()))
        .context("failed to initialise OpenTelemetry")?;

    let conf = get_configuration(None)
        .map_err(|e| AppError::Leptos(e.to_string()))
        .context("failed to read leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let target = config.bind_target(leptos_options.site_addr)?;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(
            ServiceBuilder::new()
                .layer(OtelAxumLayer::default())
                .layer(OtelInResponseLayer)
                .layer(CompressionLayer::new()),
        )
        .with_state(leptos_options);

    match target {
        BindTarget::Unix(socket_path) => {
            tracing::info!(socket = %socket_path, "listening on unix socket");
            let listener = tokio::net::UnixListener::bind(&socket_path)
                .map_err(AppError::from)
                .with_context(|| format!("failed to bind {socket_path}"))?;
            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        BindTarget::Tcp(addr) => {
            tracing::info!("listening on http://{}", &addr);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .map_err(AppError::from)
                .with_context(|| format!("failed to bind {addr}"))?;
            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    tracing::info!("server stopped");
    Ok(())
}

#[cfg(feature = "ssr")]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
