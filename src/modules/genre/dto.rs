use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::modules::genre::model::Genre;

pub const NAME_MIN_LEN: usize = 5;
pub const NAME_MAX_LEN: usize = 50;

/// Body of both create and update requests.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenreInput {
    #[validate(
        required(message = "\"name\" is required"),
        custom(function = "validate_name_length")
    )]
    #[schema(example = "Documentary")]
    pub name: Option<String>,
}

fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();

    let message = if len < NAME_MIN_LEN {
        format!("\"name\" length must be at least {NAME_MIN_LEN} characters long")
    } else if len > NAME_MAX_LEN {
        format!("\"name\" length must be less than or equal to {NAME_MAX_LEN} characters long")
    } else {
        return Ok(());
    };

    Err(ValidationError::new("length").with_message(Cow::Owned(message)))
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct GenreResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id,
            name: g.name,
        }
    }
}
