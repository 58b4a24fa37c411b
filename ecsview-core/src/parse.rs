//! Identifier parsing
//!
//! ECS hands back composite strings (ARNs, image references) and the dashboard
//! only displays fragments of them. Each parser documents the shape it expects
//! and returns a [`ParseError`] when the input does not match.

use thiserror::Error;

/// Errors produced when a composite identifier does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No `/` separator where one is required
    #[error("expected '/' in {kind} '{input}'")]
    MissingSeparator { kind: &'static str, input: String },

    /// The image reference carries no `:tag`
    #[error("image reference '{0}' has no tag")]
    MissingImageTag(String),

    /// The extracted fragment is empty
    #[error("empty {kind} in '{input}'")]
    Empty { kind: &'static str, input: String },
}

/// Short task definition identifier (`family:revision`) from a task definition ARN
///
/// Expects `arn:aws:ecs:<region>:<account>:task-definition/<family>:<revision>`
/// and returns everything after the last `/`.
pub fn task_definition_id(arn: &str) -> Result<&str, ParseError> {
    let (_, tail) = arn
        .rsplit_once('/')
        .ok_or_else(|| ParseError::MissingSeparator {
            kind: "task definition ARN",
            input: arn.to_string(),
        })?;

    if tail.is_empty() {
        return Err(ParseError::Empty {
            kind: "task definition id",
            input: arn.to_string(),
        });
    }

    Ok(tail)
}

/// Task identifier from a task ARN
///
/// Accepts both the long ARN form (`arn:aws:ecs:...:task/<cluster>/<id>`) and
/// a bare identifier, which is returned unchanged.
pub fn task_id(arn_or_id: &str) -> Result<&str, ParseError> {
    let id = arn_or_id
        .rsplit_once('/')
        .map_or(arn_or_id, |(_, tail)| tail);

    if id.is_empty() {
        return Err(ParseError::Empty {
            kind: "task id",
            input: arn_or_id.to_string(),
        });
    }

    Ok(id)
}

/// Display tag from a container image reference
///
/// Expects `[registry[:port]/]repository:tag[@digest]`. Only the last path
/// segment is inspected, so a registry port is never mistaken for a tag. A
/// `@digest` suffix is dropped first; a digest-only reference has no tag.
pub fn image_tag(image: &str) -> Result<&str, ParseError> {
    let name = image.split_once('@').map_or(image, |(name, _)| name);
    let last_segment = name.rsplit('/').next().unwrap_or(name);

    let (_, tag) = last_segment
        .rsplit_once(':')
        .ok_or_else(|| ParseError::MissingImageTag(image.to_string()))?;

    if tag.is_empty() {
        return Err(ParseError::Empty {
            kind: "image tag",
            input: image.to_string(),
        });
    }

    Ok(tag)
}

/// Log stream name written by the `awslogs` driver: `family/container/task_id`
pub fn log_stream_name(family: &str, container_name: &str, task_id: &str) -> String {
    format!("{}/{}/{}", family, container_name, task_id)
}
