use std::sync::Mutex;

use axum::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::model::{Comment, Post, SortOption};

use super::{Error, PostStore};

/// In-memory store used to exercise handlers and the synchronizer without
/// a running MongoDB deployment.
///
/// Ids are real `ObjectId`s so identifier syntax matches the Mongo-backed
/// store exactly.
#[derive(Debug, Default)]
pub struct MemoryStore {
	posts: Mutex<Vec<Post>>,
}

#[async_trait]
impl PostStore for MemoryStore {
	async fn insert(&self, mut post: Post) -> Result<ObjectId, Error> {
		let id = ObjectId::new();
		post.id = Some(id);

		self.posts.lock().unwrap().push(post);

		Ok(id)
	}

	async fn find_all(&self, sort: SortOption) -> Result<Vec<Post>, Error> {
		let mut posts = self.posts.lock().unwrap().clone();

		// Stable sorts, so insertion order breaks ties like Mongo's
		// natural order does for documents inserted in sequence.
		match sort {
			SortOption::DateAsc => posts.sort_by(|a, b| a.date.cmp(&b.date)),
			SortOption::DateDesc => posts.sort_by(|a, b| b.date.cmp(&a.date)),
			SortOption::TitleAsc => posts.sort_by(|a, b| a.title.cmp(&b.title)),
			SortOption::TitleDesc => posts.sort_by(|a, b| b.title.cmp(&a.title)),
		}

		Ok(posts)
	}

	async fn push_comment(&self, id: ObjectId, comment: &Comment) -> Result<bool, Error> {
		let mut posts = self.posts.lock().unwrap();

		let Some(post) = posts.iter_mut().find(|post| post.id == Some(id)) else {
			return Ok(false);
		};

		post.comments.push(comment.clone());

		Ok(true)
	}

	async fn count_by_author(&self, author: &str) -> Result<i64, Error> {
		let count = self
			.posts
			.lock()
			.unwrap()
			.iter()
			.filter(|post| post.author == author)
			.count();

		Ok(i64::try_from(count).unwrap_or(i64::MAX))
	}

	async fn set_author_count(&self, author: &str, count: i64) -> Result<u64, Error> {
		let mut matched = 0;

		for post in self
			.posts
			.lock()
			.unwrap()
			.iter_mut()
			.filter(|post| post.author == author)
		{
			post.author_post_count = count;
			matched += 1;
		}

		Ok(matched)
	}

	async fn distinct_authors(&self) -> Result<Vec<String>, Error> {
		let mut authors: Vec<String> = Vec::new();

		for post in self.posts.lock().unwrap().iter() {
			if !authors.contains(&post.author) {
				authors.push(post.author.clone());
			}
		}

		Ok(authors)
	}

	async fn is_empty(&self) -> Result<bool, Error> {
		Ok(self.posts.lock().unwrap().is_empty())
	}
}

#[cfg(test)]
mod test {
	use mongodb::bson::oid::ObjectId;

	use crate::model::{Comment, Post, SortOption};
	use crate::store::PostStore;

	use super::MemoryStore;

	fn post(title: &str, author: &str, date: &str) -> Post {
		Post {
			id: None,
			title: title.into(),
			content: "content".into(),
			author: author.into(),
			date: date.into(),
			author_post_count: 0,
			comments: Vec::new(),
		}
	}

	#[tokio::test]
	async fn test_insert_assigns_distinct_ids() {
		let store = MemoryStore::default();

		let first = store
			.insert(post("a", "u", "2024-01-01T00:00:00Z"))
			.await
			.unwrap();
		let second = store
			.insert(post("b", "u", "2024-01-02T00:00:00Z"))
			.await
			.unwrap();

		assert_ne!(first, second);
		assert!(!store.is_empty().await.unwrap());
	}

	#[tokio::test]
	async fn test_push_comment_reports_unmatched_id() {
		let store = MemoryStore::default();

		let comment = Comment {
			author: "u".into(),
			content: "hi".into(),
		};

		assert!(!store.push_comment(ObjectId::new(), &comment).await.unwrap());

		let id = store
			.insert(post("a", "u", "2024-01-01T00:00:00Z"))
			.await
			.unwrap();

		assert!(store.push_comment(id, &comment).await.unwrap());
	}

	#[tokio::test]
	async fn test_distinct_authors_dedupes() {
		let store = MemoryStore::default();

		store
			.insert(post("a", "u1", "2024-01-01T00:00:00Z"))
			.await
			.unwrap();
		store
			.insert(post("b", "u2", "2024-01-02T00:00:00Z"))
			.await
			.unwrap();
		store
			.insert(post("c", "u1", "2024-01-03T00:00:00Z"))
			.await
			.unwrap();

		assert_eq!(store.distinct_authors().await.unwrap(), ["u1", "u2"]);
	}

	#[tokio::test]
	async fn test_set_author_count_returns_matched() {
		let store = MemoryStore::default();

		store
			.insert(post("a", "u1", "2024-01-01T00:00:00Z"))
			.await
			.unwrap();
		store
			.insert(post("b", "u1", "2024-01-02T00:00:00Z"))
			.await
			.unwrap();

		assert_eq!(store.set_author_count("u1", 2).await.unwrap(), 2);
		assert_eq!(store.set_author_count("nobody", 1).await.unwrap(), 0);

		for post in store.find_all(SortOption::DateAsc).await.unwrap() {
			assert_eq!(post.author_post_count, 2);
		}
	}
}
