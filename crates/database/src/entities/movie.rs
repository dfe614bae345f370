//! Movie entity definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::actor::{Actor, CreateActorRequest, NewActor};
use super::censorship::CensorshipLevel;
use crate::validation::{check_date, check_enum, check_name, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub public_id: String,
    pub name: String,
    pub release_date: NaiveDate,
    pub censorship_level: CensorshipLevel,
    pub actors: Vec<Actor>,
    pub created_at: String,
    pub updated_at: String,
}

/// Raw movie payload as received from clients.
///
/// Dates and enum values are kept as raw JSON so that malformed input,
/// including values of the wrong type, is reported per field by
/// [`CreateMovieRequest::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMovieRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub release_date: Option<Value>,
    #[serde(default)]
    pub censorship_level: Option<Value>,
    /// Actors created together with the movie
    #[serde(default)]
    pub actors: Vec<CreateActorRequest>,
    /// Public IDs of existing actors to attach
    #[serde(default)]
    pub actor_ids: Vec<String>,
}

/// A validated movie ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub name: String,
    pub release_date: NaiveDate,
    pub censorship_level: CensorshipLevel,
    pub actors: Vec<NewActor>,
    pub actor_ids: Vec<String>,
}

/// Optional criteria for listing movies. The default matches every movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieFilter {
    pub censorship_level: Option<CensorshipLevel>,
}

impl MovieFilter {
    pub fn by_censorship_level(level: CensorshipLevel) -> Self {
        Self {
            censorship_level: Some(level),
        }
    }
}

impl CreateMovieRequest {
    /// Validate every field and produce the typed movie.
    pub fn validate(&self) -> Result<NewMovie, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_name(&mut errors, "name", &self.name);
        let release_date = check_date(&mut errors, "release_date", self.release_date.as_ref());

        let censorship_level = match self.censorship_level.as_ref() {
            None => Some(CensorshipLevel::default()),
            Some(raw) => check_enum::<CensorshipLevel>(
                &mut errors,
                "censorship_level",
                raw,
                CensorshipLevel::VALUES,
            ),
        };

        let mut actors = Vec::with_capacity(self.actors.len());
        for (i, actor) in self.actors.iter().enumerate() {
            match actor.validate() {
                Ok(actor) => actors.push(actor),
                Err(nested) => errors.merge_nested(&format!("actors[{i}]"), nested),
            }
        }

        match (release_date, censorship_level) {
            (Some(release_date), Some(censorship_level)) if errors.is_empty() => Ok(NewMovie {
                name: self.name.trim().to_string(),
                release_date,
                censorship_level,
                actors,
                actor_ids: self.actor_ids.clone(),
            }),
            _ => Err(errors),
        }
    }
}
