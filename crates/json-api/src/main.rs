//! Vitrine Catalog JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors},
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use vitrine_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod categories;
mod config;
mod extensions;
mod healthcheck;
mod logging;
mod messages;
mod pagination;
mod products;
mod reviews;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod validate;

/// Vitrine JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    logging::init(&config.logging);

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_database_url(&config.database.database_url).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    // Identity and role arrive as plain gateway headers, so cross-origin
    // callers are allowed wholesale; access control lives upstream.
    let cors = Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler();

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(cors)
        .hoop(inject(State::shared(app, config.service.service_name.clone())))
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(
                    Router::with_path("categories")
                        .get(categories::index::handler)
                        .post(categories::create::handler)
                        .push(Router::with_path("tree").get(categories::tree::handler))
                        .push(Router::with_path("slug/{slug}").get(categories::slug::handler))
                        .push(
                            Router::with_path("{id}")
                                .get(categories::get::handler)
                                .put(categories::update::handler)
                                .delete(categories::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .post(products::create::handler)
                        .push(Router::with_path("featured").get(products::featured::handler))
                        .push(Router::with_path("slug/{slug}").get(products::slug::handler))
                        .push(
                            Router::with_path("{id}")
                                .get(products::get::handler)
                                .put(products::update::handler)
                                .delete(products::delete::handler)
                                .push(Router::with_path("stock").patch(products::stock::handler))
                                .push(
                                    Router::with_path("reviews")
                                        .get(reviews::index::handler)
                                        .post(reviews::create::handler),
                                ),
                        ),
                ),
        );

    let doc = OpenApi::new("Vitrine Catalog API", "0.1.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
