use crate::model::Post;
use crate::store::{self, PostStore};

/// Inserts a fixed set of sample posts when the collection is empty, so a
/// fresh deployment has something to show on the feed.
///
/// The counts on the seeded posts are left at zero; the full resync that
/// follows at startup stamps the real values.
pub async fn seed_if_empty(store: &dyn PostStore) -> Result<(), store::Error> {
	if !store.is_empty().await? {
		tracing::info!("store already has posts, skipping seed");

		return Ok(());
	}

	tracing::info!("seeding sample posts");

	for (title, content, author) in [
		(
			"Getting Started with Rust",
			"Rust pairs low-level control with a type system that catches whole classes of bugs at compile time.",
			"DevUser",
		),
		(
			"Why Document Stores?",
			"Document databases keep related data together in one place, which fits content like posts and their comments.",
			"DataGuru",
		),
		(
			"Async All the Way Down",
			"An async runtime lets a small server juggle many connections without a thread per request.",
			"Speedster",
		),
	] {
		store
			.insert(Post::new(title.into(), content.into(), author.into()))
			.await?;
	}

	Ok(())
}
