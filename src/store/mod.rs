mod mongo;

#[cfg(test)]
pub mod memory;

pub use mongo::MongoStore;

use axum::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::model::{Comment, Post, SortOption};

/// Error type for store operations.
///
/// Driver failures are not retried; they surface to the caller as a server
/// error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("store unavailable: {0}")]
	Backend(#[from] mongodb::error::Error),
	#[error("bson serialization error: {0}")]
	Bson(#[from] mongodb::bson::ser::Error),
}

/// Access to the post collection.
///
/// Handlers receive this as `Arc<dyn PostStore>` through the router state,
/// so tests can swap the Mongo-backed store for an in-memory one.
#[async_trait]
pub trait PostStore: Send + Sync {
	/// Inserts a post and returns the id the store assigned to it.
	async fn insert(&self, post: Post) -> Result<ObjectId, Error>;

	/// Returns every post, ordered by the given sort option.
	async fn find_all(&self, sort: SortOption) -> Result<Vec<Post>, Error>;

	/// Appends a comment to the end of a post's comment array.
	///
	/// Returns `false` when no post with that id exists.
	async fn push_comment(&self, id: ObjectId, comment: &Comment) -> Result<bool, Error>;

	/// The number of posts authored by `author`.
	async fn count_by_author(&self, author: &str) -> Result<i64, Error>;

	/// Stamps `count` onto every post authored by `author`, returning the
	/// number of documents matched.
	async fn set_author_count(&self, author: &str, count: i64) -> Result<u64, Error>;

	/// Every distinct author present in the collection.
	async fn distinct_authors(&self) -> Result<Vec<String>, Error>;

	/// Whether the collection holds no posts at all.
	async fn is_empty(&self) -> Result<bool, Error>;
}
