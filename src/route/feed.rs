use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
	extract::{Json, Query},
	model::{Comment, Post, SortOption},
	AppState, DynStore, Error,
};

pub fn routes() -> Router<AppState> {
	Router::new().route("/", get(get_feed))
}

#[derive(Debug, Deserialize, Validate)]
pub struct FeedParams {
	/// Anything outside the four enumerated options is rejected with a
	/// validation error before the handler runs.
	#[serde(default)]
	pub sort_option: SortOption,
}

/// A post as returned to the client, with its id rendered as a hex string.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
	pub id: String,
	pub title: String,
	pub content: String,
	pub author: String,
	pub date: String,
	pub author_post_count: i64,
	pub comments: Vec<Comment>,
}

impl From<Post> for PostResponse {
	fn from(post: Post) -> Self {
		Self {
			id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
			title: post.title,
			content: post.content,
			author: post.author,
			date: post.date,
			author_post_count: post.author_post_count,
			comments: post.comments,
		}
	}
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedResponse {
	pub posts: Vec<PostResponse>,
	pub stats: BTreeMap<String, i64>,
}

/// Returns every post in the requested order, along with a map from author
/// name to that author's post count.
///
/// The counts are read straight off the documents as stamped by the last
/// resync; nothing is aggregated or computed here.
async fn get_feed(
	State(store): State<DynStore>,
	Query(params): Query<FeedParams>,
) -> Result<Json<FeedResponse>, Error> {
	let mut posts = Vec::new();
	let mut stats = BTreeMap::new();

	for post in store.find_all(params.sort_option).await? {
		let post = PostResponse::from(post);

		// Last write wins; harmless, since after a resync every document
		// of an author carries the same count.
		stats.insert(post.author.clone(), post.author_post_count);
		posts.push(post);
	}

	Ok(Json(FeedResponse { posts, stats }))
}
