#![warn(clippy::pedantic)]

mod error;
mod extract;
mod model;
mod route;
mod seed;
mod store;
mod sync;

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

pub use error::Error;

use store::{MongoStore, PostStore};

pub type DynStore = Arc<dyn PostStore>;
pub type AppState = State;

/// The shared application state.
///
/// The store is held behind a trait object so tests can run the full
/// router against an in-memory store instead of a MongoDB deployment.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub store: DynStore,
}

/// Builds the router with every route and middleware attached.
pub fn app(state: State) -> Router {
	Router::new()
		.route_service("/", ServeFile::new("static/index.html"))
		.nest("/feed", route::feed::routes())
		.nest("/posts", route::post::routes())
		.layer(CorsLayer::permissive())
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt::init();
	dotenvy::dotenv().ok();

	let uri = std::env::var("MONGODB_URI")
		.unwrap_or_else(|_| "mongodb://localhost:27017".to_owned());
	let db = std::env::var("MONGODB_DB").unwrap_or_else(|_| "my_blog_db".to_owned());

	let store: DynStore = Arc::new(
		MongoStore::connect(&uri, &db)
			.await
			.expect("failed to connect to store"),
	);

	seed::seed_if_empty(store.as_ref())
		.await
		.expect("failed to seed sample posts");
	sync::full_resync(store.as_ref())
		.await
		.expect("failed to sync author post counts");

	let app = app(State { store });

	let port = std::env::var("PORT").map_or_else(
		|_| 8000,
		|port| port.parse().expect("PORT must be a number"),
	);

	let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on port {}", port);

	axum::serve(listener, app).await.unwrap();
}
