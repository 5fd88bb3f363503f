//! Example schema for a social-media "tweet" payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ModelError, ValidationResult};
use crate::{FluentModel, fluent_setter};

pub const MAX_TEXT_CHARS: usize = 140;
pub const MAX_DESCRIPTION_CHARS: usize = 80;

/// Replaces every newline with a single space.
pub fn collapse_newlines(value: String) -> String {
    value.replace('\n', " ")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FluentModel)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub screen_name: String,
    pub location: String,
    pub url: String,
    #[fluent(validate(length(max = 80)), normalize = "collapse_newlines")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FluentModel)]
pub struct Unwound {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FluentModel)]
pub struct Url {
    pub url: String,
    #[fluent(nested)]
    pub unwound: Unwound,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FluentModel)]
pub struct Entities {
    pub hashtags: Vec<Value>,
    #[fluent(nested)]
    pub urls: Vec<Url>,
    pub user_mentions: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FluentModel)]
pub struct Tweet {
    pub created_at: String,
    pub id_str: String,
    #[fluent(validate(length(max = 140)), normalize = "collapse_newlines")]
    pub text: String,
    #[fluent(nested)]
    pub user: User,
    pub place: Map<String, Value>,
    #[fluent(nested)]
    pub entities: Entities,
}

impl Tweet {
    pub fn from_json(input: &str) -> Result<Self, ModelError> {
        crate::from_json(input)
    }

    /// Alias for `with_text`, kept for callers that think of the text as the body.
    #[fluent_setter(text)]
    pub fn with_body(&mut self, value: String) {}

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Builds a tweet with chained setters.
pub fn sample() -> ValidationResult<Tweet> {
    let mut user = User::default();
    user.with_id(42)?
        .with_name("Ada")?
        .with_screen_name("ada")?
        .with_location("London")?
        .with_url("https://example.com/ada")?
        .with_description("Writes about engines.\nAnd notes.")?;

    let mut link = Url::default();
    link.with_url("https://t.co/abc")?.with_unwound(Unwound {
        url: "https://example.com/post".to_string(),
        title: "A post".to_string(),
    })?;

    let mut entities = Entities::default();
    entities.with_urls(vec![link])?;

    let mut tweet = Tweet::default();
    tweet
        .with_created_at("Wed Oct 10 20:19:24 +0000 2018")?
        .with_id_str("1050118621198921728")?
        .with_body("Hello\nworld".to_string())?
        .with_user(user)?
        .with_entities(entities)?;
    Ok(tweet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Model;

    #[test]
    fn sample_is_valid_and_normalized() {
        let tweet = sample().expect("sample builds");
        assert_eq!(tweet.text, "Hello world");
        assert_eq!(tweet.user.description, "Writes about engines. And notes.");
        assert_eq!(tweet.entities.urls[0].unwound.title, "A post");
        assert!(tweet.validate().is_ok());
    }

    #[test]
    fn text_over_limit_is_rejected() {
        let mut tweet = sample().expect("sample builds");
        let err = tweet.with_text("x".repeat(MAX_TEXT_CHARS + 1)).unwrap_err();
        let issue = err.issue_for("text").expect("text issue");
        assert_eq!(issue.code, "validation.length");
        assert_eq!(tweet.text, "Hello world");
    }

    #[test]
    fn text_at_limit_counts_chars_not_bytes() {
        let mut tweet = Tweet::default();
        tweet.with_text("é".repeat(MAX_TEXT_CHARS)).expect("140 chars is allowed");
        assert_eq!(tweet.char_count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn description_over_limit_is_rejected() {
        let mut user = User::default();
        let err = user.with_description("d".repeat(MAX_DESCRIPTION_CHARS + 1)).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert!(user.description.is_empty());
    }

    #[test]
    fn nested_issues_carry_paths() {
        let mut tweet = sample().expect("sample builds");
        tweet.user.description = "d".repeat(MAX_DESCRIPTION_CHARS + 1);
        let err = tweet.validate().unwrap_err();
        assert!(err.issue_for("user.description").is_some());
    }
}
