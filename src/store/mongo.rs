use axum::async_trait;
use futures::TryStreamExt;
use mongodb::{
	bson::{doc, oid::ObjectId, to_bson, Document},
	options::FindOptions,
	Client, Collection,
};

use crate::model::{Comment, Post, SortOption};

use super::{Error, PostStore};

/// Store backed by a MongoDB `posts` collection.
#[derive(Debug, Clone)]
pub struct MongoStore {
	posts: Collection<Post>,
}

impl MongoStore {
	/// Connects to the given deployment and selects the `posts` collection
	/// of `db`.
	pub async fn connect(uri: &str, db: &str) -> Result<Self, Error> {
		let client = Client::with_uri_str(uri).await?;

		Ok(Self {
			posts: client.database(db).collection("posts"),
		})
	}

	fn sort_document(sort: SortOption) -> Document {
		match sort {
			SortOption::DateAsc => doc! { "date": 1 },
			SortOption::DateDesc => doc! { "date": -1 },
			SortOption::TitleAsc => doc! { "title": 1 },
			SortOption::TitleDesc => doc! { "title": -1 },
		}
	}
}

#[async_trait]
impl PostStore for MongoStore {
	async fn insert(&self, mut post: Post) -> Result<ObjectId, Error> {
		let id = ObjectId::new();
		post.id = Some(id);

		self.posts.insert_one(post, None).await?;

		Ok(id)
	}

	async fn find_all(&self, sort: SortOption) -> Result<Vec<Post>, Error> {
		let options = FindOptions::builder()
			.sort(Self::sort_document(sort))
			.build();

		Ok(self.posts.find(None, options).await?.try_collect().await?)
	}

	async fn push_comment(&self, id: ObjectId, comment: &Comment) -> Result<bool, Error> {
		let result = self
			.posts
			.update_one(
				doc! { "_id": id },
				doc! { "$push": { "comments": to_bson(comment)? } },
				None,
			)
			.await?;

		Ok(result.matched_count > 0)
	}

	async fn count_by_author(&self, author: &str) -> Result<i64, Error> {
		let count = self
			.posts
			.count_documents(doc! { "author": author }, None)
			.await?;

		Ok(i64::try_from(count).unwrap_or(i64::MAX))
	}

	async fn set_author_count(&self, author: &str, count: i64) -> Result<u64, Error> {
		let result = self
			.posts
			.update_many(
				doc! { "author": author },
				doc! { "$set": { "author_post_count": count } },
				None,
			)
			.await?;

		Ok(result.matched_count)
	}

	async fn distinct_authors(&self) -> Result<Vec<String>, Error> {
		let values = self.posts.distinct("author", None, None).await?;

		Ok(values
			.into_iter()
			.filter_map(|value| value.as_str().map(str::to_owned))
			.collect())
	}

	async fn is_empty(&self) -> Result<bool, Error> {
		Ok(self.posts.count_documents(None, None).await? == 0)
	}
}
