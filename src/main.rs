use axum::ServiceExt;
use clap::Parser;
use std::sync::Arc;

mod aggregate;
mod args;
mod avatar;
mod blog;
mod render;
mod routes;
mod source;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::Args::parse();
    init_logging(&args);

    let source = source::http::HttpSource::new(args.api_base.clone(), args.timeout())?;
    let state = Arc::new(state::State::new(Arc::new(source)));
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    tracing::info!(
        "Serving posts from {} on http://{}",
        args.api_base,
        listener.local_addr()?
    );

    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}

fn init_logging(args: &args::Args) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
