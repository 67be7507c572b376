use axum::{
	extract::{Path, State},
	routing::post,
	Router,
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
	extract::Json,
	model::{Comment, Post},
	sync, AppState, DynStore, Error,
};

pub fn routes() -> Router<AppState> {
	Router::new()
		.route("/", post(create_post))
		.route("/:id/comments", post(add_comment))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostInput {
	#[validate(length(min = 1))]
	pub title: String,
	#[validate(length(min = 1))]
	pub content: String,
	#[validate(length(min = 1))]
	pub author: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentInput {
	#[validate(length(min = 1))]
	pub author: String,
	#[validate(length(min = 1))]
	pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
	pub id: String,
	pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
	pub message: String,
}

/// Creates a new post, then re-stamps the author's post count onto every
/// one of their documents.
///
/// The insert and the count update are two separate store operations. A
/// reader in between sees the new post with a count of zero until the
/// resync lands; the next resync for this author always converges.
async fn create_post(
	State(store): State<DynStore>,
	Json(input): Json<CreatePostInput>,
) -> Result<Json<CreatedResponse>, Error> {
	let post = Post::new(input.title, input.content, input.author);
	let author = post.author.clone();

	let id = store.insert(post).await?;
	sync::resync_author(store.as_ref(), &author).await?;

	Ok(Json(CreatedResponse {
		id: id.to_hex(),
		message: "Post created successfully".into(),
	}))
}

/// Appends a comment to the end of the comment array of the post with the
/// given id. Does not touch the author's post count.
async fn add_comment(
	State(store): State<DynStore>,
	Path(post_id): Path<String>,
	Json(input): Json<CreateCommentInput>,
) -> Result<Json<MessageResponse>, Error> {
	let id =
		ObjectId::parse_str(&post_id).map_err(|_| Error::MalformedPostId(post_id.clone()))?;

	let comment = Comment {
		author: input.author,
		content: input.content,
	};

	if !store.push_comment(id, &comment).await? {
		return Err(Error::UnknownPost(post_id));
	}

	Ok(Json(MessageResponse {
		message: "Comment added successfully".into(),
	}))
}
