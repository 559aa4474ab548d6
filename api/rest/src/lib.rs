use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use configure::configure;
use context::ApiRestCtx;
use error_handler::default_error_handler;
use service::preflight::{ALLOWED_HEADERS, ALLOWED_METHODS};
use tokio_util::sync::CancellationToken;

mod configure;
pub mod context;
mod error_handler;
mod middleware;
mod model;
mod service;
mod util;

pub struct ApiRestServer {
    address: String,
    context: web::Data<ApiRestCtx>,
}

impl ApiRestServer {
    pub fn new(host: &str, port: &u16, ctx: ApiRestCtx) -> Self {
        dv_log::info(Some("⚡"), "[ApiRestServer] Initializing component");

        let address = format!("{host}:{port}");
        let context = web::Data::new(ctx);

        Self { address, context }
    }

    /// Serves until the server stops on its own or `cancel_token` fires.
    pub async fn run(self, cancel_token: CancellationToken) -> Result<()> {
        dv_log::info(
            Some("💫"),
            format!("[ApiRestServer] Running component on {}", self.address),
        );

        let context = self.context;
        let server = HttpServer::new(move || app(context.clone()))
            .disable_signals()
            .bind(&self.address)?
            .run();
        let handle = server.handle();

        tokio::select! {
            res = server => Ok(res?),
            _ = cancel_token.cancelled() => {
                dv_log::info(Some("🛑"), "[ApiRestServer] Stopping component");
                handle.stop(true).await;
                Ok(())
            }
        }
    }
}

/// The complete application: CORS, JSON error rewriting, request logging and
/// every route, sharing `context`. JSON bodies are accepted whatever their
/// declared content type.
pub fn app(
    context: web::Data<ApiRestCtx>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(ALLOWED_METHODS)
        .allowed_headers(ALLOWED_HEADERS);

    App::new()
        .wrap(ErrorHandlers::new().default_handler(default_error_handler))
        .wrap(cors)
        .wrap(Logger::default())
        .app_data(context.clone())
        .app_data(
            web::JsonConfig::default()
                .content_type_required(false)
                .content_type(|_| true),
        )
        .configure(|cfg| configure(cfg, &context))
}
