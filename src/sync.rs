use crate::store::{self, PostStore};

/// Recomputes the post count of every distinct author and stamps it onto
/// each of their documents.
///
/// Runs once at startup. Both this and [`resync_author`] are idempotent:
/// running them again with no intervening writes changes nothing, so
/// re-running after a crash is always safe.
pub async fn full_resync(store: &dyn PostStore) -> Result<(), store::Error> {
	tracing::info!("syncing author post counts");

	for author in store.distinct_authors().await? {
		resync_author(store, &author).await?;
	}

	Ok(())
}

/// Recomputes and stamps the post count of a single author, returning the
/// number of documents written.
///
/// Called after every post creation. This rewrites the count on all of the
/// author's documents, not just the new one, so every one of their posts
/// carries the same, currently-correct value afterwards.
pub async fn resync_author(store: &dyn PostStore, author: &str) -> Result<u64, store::Error> {
	let count = store.count_by_author(author).await?;

	store.set_author_count(author, count).await
}
