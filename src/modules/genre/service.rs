use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::dto::{GenreInput, GenreResponse};
use crate::common::error::AppError;
use crate::state::AppState;

pub const GENRE_NOT_FOUND: &str = "The genre with the given ID was not found.";

pub struct GenreService;

impl GenreService {
    pub async fn find_all(state: &AppState) -> Result<Vec<GenreResponse>, AppError> {
        let genres = state.genres.find_all_sorted().await?;

        Ok(genres.into_iter().map(GenreResponse::from).collect())
    }

    pub async fn create(state: &AppState, req: GenreInput) -> Result<GenreResponse, AppError> {
        let name = validated_name(req)?;
        let genre = state.genres.insert(&name).await?;

        info!(genre_id = %genre.id, "genre created");
        Ok(genre.into())
    }

    pub async fn find_by_id(state: &AppState, id: &str) -> Result<GenreResponse, AppError> {
        let id = parse_id(id)?;

        state
            .genres
            .find_by_id(id)
            .await?
            .map(GenreResponse::from)
            .ok_or_else(not_found)
    }

    pub async fn update(
        state: &AppState,
        id: &str,
        req: GenreInput,
    ) -> Result<GenreResponse, AppError> {
        let name = validated_name(req)?;
        let id = parse_id(id)?;

        let genre = state
            .genres
            .update_name(id, &name)
            .await?
            .ok_or_else(not_found)?;

        info!(genre_id = %genre.id, "genre updated");
        Ok(genre.into())
    }

    pub async fn delete(state: &AppState, id: &str) -> Result<GenreResponse, AppError> {
        let id = parse_id(id)?;

        let genre = state.genres.remove(id).await?.ok_or_else(not_found)?;

        info!(genre_id = %genre.id, "genre deleted");
        Ok(genre.into())
    }
}

fn validated_name(req: GenreInput) -> Result<String, AppError> {
    req.validate()?;
    req.name
        .ok_or_else(|| AppError::Validation("\"name\" is required".to_string()))
}

// Ids that cannot name a stored genre are reported like unknown ones.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| not_found())
}

fn not_found() -> AppError {
    AppError::NotFound(GENRE_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::AppConfig;
    use crate::modules::genre::memory::InMemoryGenreRepository;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(
            AppConfig::in_memory("secret"),
            Arc::new(InMemoryGenreRepository::new()),
        )
    }

    fn input(name: &str) -> GenreInput {
        GenreInput {
            name: Some(name.to_string()),
        }
    }

    #[tokio::test]
    async fn update_validates_before_looking_up_id() {
        let err = GenreService::update(&state(), "not-an-id", input("abc"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let err = GenreService::find_by_id(&state(), "42").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == GENRE_NOT_FOUND));
    }

    #[tokio::test]
    async fn create_then_delete_round_trip() {
        let state = state();
        let created = GenreService::create(&state, input("Documentary")).await.unwrap();

        let deleted = GenreService::delete(&state, &created.id.to_string()).await.unwrap();
        assert_eq!(deleted, created);

        let err = GenreService::delete(&state, &created.id.to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
