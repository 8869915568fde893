//! In-memory [`GenreRepository`], used when no database is configured and
//! by the router tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::Genre;
use super::repository::GenreRepository;
use crate::infrastructure::db::error::RepositoryError;

#[derive(Debug, Clone, Default)]
pub struct InMemoryGenreRepository {
    genres: Arc<RwLock<BTreeMap<Uuid, Genre>>>,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.genres.read().await.is_empty()
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    async fn find_all_sorted(&self) -> Result<Vec<Genre>, RepositoryError> {
        let mut genres: Vec<Genre> = self.genres.read().await.values().cloned().collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(genres)
    }

    async fn insert(&self, name: &str) -> Result<Genre, RepositoryError> {
        let genre = Genre {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        self.genres.write().await.insert(genre.id, genre.clone());
        Ok(genre)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>, RepositoryError> {
        Ok(self.genres.read().await.get(&id).cloned())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Genre>, RepositoryError> {
        let mut genres = self.genres.write().await;
        Ok(genres.get_mut(&id).map(|genre| {
            genre.name = name.to_string();
            genre.clone()
        }))
    }

    async fn remove(&self, id: Uuid) -> Result<Option<Genre>, RepositoryError> {
        Ok(self.genres.write().await.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn lists_by_name_in_byte_order() {
        let repo = InMemoryGenreRepository::new();
        for name in ["thriller", "Comedy", "Action", "action"] {
            repo.insert(name).await.unwrap();
        }

        let names: Vec<String> = repo
            .find_all_sorted()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();

        assert_eq!(names, vec!["Action", "Comedy", "action", "thriller"]);
    }

    #[tokio::test]
    async fn update_returns_post_update_value() {
        let repo = InMemoryGenreRepository::new();
        let genre = repo.insert("Horror").await.unwrap();

        let updated = repo.update_name(genre.id, "Slasher").await.unwrap().unwrap();

        assert_eq!(updated.id, genre.id);
        assert_eq!(updated.name, "Slasher");
        assert_eq!(repo.find_by_id(genre.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn unknown_ids_are_none() {
        let repo = InMemoryGenreRepository::new();
        let id = Uuid::new_v4();

        assert_eq!(repo.find_by_id(id).await.unwrap(), None);
        assert_eq!(repo.update_name(id, "Western").await.unwrap(), None);
        assert_eq!(repo.remove(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_returns_removed_record() {
        let repo = InMemoryGenreRepository::new();
        let genre = repo.insert("Musical").await.unwrap();

        assert_eq!(repo.remove(genre.id).await.unwrap(), Some(genre.clone()));
        assert!(repo.is_empty().await);
        assert_eq!(repo.find_by_id(genre.id).await.unwrap(), None);
    }
}
