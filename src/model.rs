use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A single comment, embedded in its parent post.
///
/// Comments have no identity of their own; they only exist inside the
/// `comments` array of a post document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
	pub author: String,
	pub content: String,
}

/// A post document as stored in the `posts` collection.
///
/// `author_post_count` is denormalized: it mirrors the number of posts by
/// the same author and is only ever written by the count synchronizer,
/// never directly by a request handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
	#[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
	pub id: Option<ObjectId>,
	pub title: String,
	pub content: String,
	pub author: String,
	/// ISO-8601 creation time, stored as a string so a lexicographic sort
	/// on this field is a chronological sort.
	pub date: String,
	#[serde(default)]
	pub author_post_count: i64,
	#[serde(default)]
	pub comments: Vec<Comment>,
}

impl Post {
	/// A new, unsaved post with the creation time taken from the server
	/// clock. The id is assigned by the store on insert; the count stays
	/// zero until the next resync for this author.
	pub fn new(title: String, content: String, author: String) -> Self {
		Self {
			id: None,
			title,
			content,
			author,
			date: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
			author_post_count: 0,
			comments: Vec::new(),
		}
	}
}

/// The order posts are returned in from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
	#[default]
	DateDesc,
	DateAsc,
	TitleAsc,
	TitleDesc,
}
