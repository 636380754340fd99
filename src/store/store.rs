//! The in-memory post store.

use super::errors::{StoreError, StoreResult};
use super::post::Post;

/// Sort fields accepted by [`PostStore::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    Title,
    Content,
}

impl SortField {
    fn parse(field: &str) -> StoreResult<Self> {
        match field {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            other => Err(StoreError::InvalidArgument(format!(
                "Invalid sort field: '{}'. Allowed: title, content",
                other
            ))),
        }
    }
}

/// Sort directions accepted by [`PostStore::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn parse(direction: &str) -> StoreResult<Self> {
        match direction {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(StoreError::InvalidArgument(format!(
                "Invalid sort direction: '{}'. Allowed: asc, desc",
                other
            ))),
        }
    }
}

/// The authoritative post collection.
///
/// Posts are kept in insertion order. Id assignment uses a monotonic
/// high-water counter: it starts above the highest seeded id and never
/// decreases, so a deleted id is never handed out again, even when the
/// deleted post held the current maximum.
#[derive(Debug, Clone)]
pub struct PostStore {
    posts: Vec<Post>,
    next_id: u64,
}

impl PostStore {
    /// Create an empty store. The first assigned id will be 1.
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated with the given posts.
    ///
    /// Seed ids must already be unique; the id counter starts above the
    /// highest one.
    pub fn with_seed(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        Self { posts, next_id }
    }

    /// The fixture collection the server boots with.
    pub fn seeded() -> Self {
        Self::with_seed(vec![
            Post::new(1, "First Post", "This is the first post."),
            Post::new(2, "Second Post", "This is the second post."),
            Post::new(3, "CORS Enabled", "CORS is enabled for this API."),
        ])
    }

    /// Number of posts currently stored.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Return all posts, optionally sorted.
    ///
    /// With no sort field the collection comes back in insertion order and
    /// `direction` is not inspected. With a sort field, posts are ordered by
    /// the lower-cased field value; the sort is stable, so ties keep their
    /// relative insertion order in both directions.
    pub fn list(&self, sort: Option<&str>, direction: Option<&str>) -> StoreResult<Vec<Post>> {
        let field = match sort {
            None => return Ok(self.posts.clone()),
            Some(field) => SortField::parse(field)?,
        };
        let direction = match direction {
            None => SortDirection::Ascending,
            Some(direction) => SortDirection::parse(direction)?,
        };

        let key = |post: &Post| match field {
            SortField::Title => post.title.to_lowercase(),
            SortField::Content => post.content.to_lowercase(),
        };

        let mut posts = self.posts.clone();
        match direction {
            SortDirection::Ascending => posts.sort_by(|a, b| key(a).cmp(&key(b))),
            SortDirection::Descending => posts.sort_by(|a, b| key(b).cmp(&key(a))),
        }
        Ok(posts)
    }

    /// Create a post and append it to the collection.
    ///
    /// Both fields must be non-empty after trimming; the error names every
    /// missing field. Values are stored as sent (trimming applies only to
    /// the emptiness check).
    pub fn create(&mut self, title: &str, content: &str) -> StoreResult<Post> {
        let mut missing = Vec::new();
        if title.trim().is_empty() {
            missing.push("title".to_string());
        }
        if content.trim().is_empty() {
            missing.push("content".to_string());
        }
        if !missing.is_empty() {
            return Err(StoreError::Validation(missing));
        }

        let post = Post::new(self.next_id(), title, content);
        self.posts.push(post.clone());
        Ok(post)
    }

    /// Update title and/or content of an existing post.
    ///
    /// A provided value overwrites its field only when non-empty after
    /// trimming; omitted or empty values are silently ignored. The id is
    /// immutable.
    pub fn update(
        &mut self,
        id: u64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> StoreResult<Post> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(title) = title {
            if !title.trim().is_empty() {
                post.title = title.to_string();
            }
        }
        if let Some(content) = content {
            if !content.trim().is_empty() {
                post.content = content.to_string();
            }
        }
        Ok(post.clone())
    }

    /// Remove a post by id, returning it.
    ///
    /// Relative order of the remaining posts is preserved. The removed id
    /// is never assigned again.
    pub fn delete(&mut self, id: u64) -> StoreResult<Post> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.posts.remove(index))
    }

    /// Case-insensitive substring search over title and/or content.
    ///
    /// Queries are trimmed before matching. Both queries empty returns an
    /// empty result set; this is a deliberate early exit, not a
    /// return-everything fallback. Otherwise a post matches when its
    /// lower-cased title contains the title query OR its lower-cased
    /// content contains the content query. Collection order is preserved.
    pub fn search(&self, title_query: &str, content_query: &str) -> Vec<Post> {
        let title_query = title_query.trim().to_lowercase();
        let content_query = content_query.trim().to_lowercase();
        if title_query.is_empty() && content_query.is_empty() {
            return Vec::new();
        }

        self.posts
            .iter()
            .filter(|post| {
                (!title_query.is_empty() && post.title.to_lowercase().contains(&title_query))
                    || (!content_query.is_empty()
                        && post.content.to_lowercase().contains(&content_query))
            })
            .cloned()
            .collect()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_first_id_is_one() {
        let mut store = PostStore::new();
        let post = store.create("A", "x").unwrap();
        assert_eq!(post.id, 1);
    }

    #[test]
    fn test_seeded_store_counter_starts_above_max() {
        let mut store = PostStore::seeded();
        let post = store.create("Fourth Post", "This is the fourth post.").unwrap();
        assert_eq!(post.id, 4);
    }

    #[test]
    fn test_create_rejects_blank_after_trim() {
        let mut store = PostStore::new();
        let err = store.create("   ", "x").unwrap_err();
        assert_eq!(err, StoreError::Validation(vec!["title".to_string()]));
    }

    #[test]
    fn test_create_names_all_missing_fields() {
        let mut store = PostStore::new();
        let err = store.create("", "").unwrap_err();
        assert_eq!(
            err,
            StoreError::Validation(vec!["title".to_string(), "content".to_string()])
        );
    }

    #[test]
    fn test_create_stores_values_as_sent() {
        let mut store = PostStore::new();
        let post = store.create("  padded  ", "body").unwrap();
        assert_eq!(post.title, "  padded  ");
    }

    #[test]
    fn test_list_invalid_sort_field() {
        let store = PostStore::seeded();
        let err = store.list(Some("date"), None).unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
    }

    #[test]
    fn test_list_invalid_direction() {
        let store = PostStore::seeded();
        let err = store.list(Some("title"), Some("sideways")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
    }

    #[test]
    fn test_list_without_sort_ignores_direction() {
        let store = PostStore::seeded();
        let posts = store.list(None, Some("sideways")).unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id, 1);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut store = PostStore::seeded();
        assert_eq!(store.delete(99).unwrap_err(), StoreError::NotFound(99));
    }

    #[test]
    fn test_delete_preserves_remaining_order() {
        let mut store = PostStore::seeded();
        store.delete(2).unwrap();
        let ids: Vec<u64> = store.list(None, None).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = PostStore::seeded();
        let err = store.update(99, Some("T"), None).unwrap_err();
        assert_eq!(err, StoreError::NotFound(99));
    }

    #[test]
    fn test_search_trims_queries() {
        let store = PostStore::seeded();
        let hits = store.search("  first  ", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }
}
