//! Actor entity definitions

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::{check_name, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Actor {
    pub id: i64,
    pub public_id: String,
    pub name: String,
    pub created_at: String,
}

/// Incoming actor payload, either standalone or inline with a movie.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateActorRequest {
    #[serde(default)]
    pub name: String,
}

/// A validated actor ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActor {
    pub name: String,
}

impl CreateActorRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<NewActor, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_name(&mut errors, "name", &self.name);

        errors.into_result(|| NewActor {
            name: self.name.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_actor_request_validation() {
        let actor = CreateActorRequest::new("  Sigourney Weaver ").validate().unwrap();
        assert_eq!(actor.name, "Sigourney Weaver");

        let errors = CreateActorRequest::default().validate().unwrap_err();
        assert!(errors.field("name").is_some());
    }
}
