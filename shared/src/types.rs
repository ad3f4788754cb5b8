use serde::{Deserialize, Serialize};

use crate::constants::{PASSWORD_MIN_LEN, USERNAME_MIN_LEN};

pub type ArticleId = u64;
pub type Token = String;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub text: String,
    pub topic: String,
}

impl Article {
    pub fn draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            text: self.text.clone(),
            topic: self.topic.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub text: String,
    pub topic: String,
}

impl ArticleDraft {
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            text: self.text.trim().to_string(),
            topic: self.topic.trim().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        let draft = self.trimmed();
        !draft.title.is_empty() && !draft.text.is_empty() && !draft.topic.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn trimmed(&self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }

    pub fn is_submittable(&self) -> bool {
        let credentials = self.trimmed();
        credentials.username.chars().count() >= USERNAME_MIN_LEN
            && credentials.password.chars().count() >= PASSWORD_MIN_LEN
    }
}

// ===

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginResponse {
    pub token: Token,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_need_minimum_trimmed_lengths() {
        let short = Credentials { username: " ab ".to_string(), password: "12345678".to_string() };
        assert!(!short.is_submittable());

        let padded = Credentials { username: "foo".to_string(), password: "  1234567  ".to_string() };
        assert!(!padded.is_submittable());

        let ok = Credentials { username: "foo".to_string(), password: "12345678".to_string() };
        assert!(ok.is_submittable());
    }

    #[test]
    fn draft_requires_every_field() {
        let mut draft = ArticleDraft {
            title: "Title".to_string(),
            text: "Body".to_string(),
            topic: "   ".to_string(),
        };
        assert!(!draft.is_complete());
        draft.topic = "React".to_string();
        assert!(draft.is_complete());
    }

    #[test]
    fn decodes_server_payloads() {
        let login: LoginResponse = serde_json::from_str(r#"{"token":"abc","message":"Here are your articles, foo!"}"#).unwrap();
        assert_eq!(login.token, "abc");
        assert_eq!(login.message, "Here are your articles, foo!");

        let list: ArticlesResponse = serde_json::from_str(
            r#"{"message":"ok","articles":[{"article_id":1,"title":"T","text":"X","topic":"Node"}]}"#,
        ).unwrap();
        assert_eq!(list.articles.len(), 1);
        assert_eq!(list.articles[0].topic, "Node");

        let deleted: MessageResponse = serde_json::from_str(r#"{"message":"Article 1 was deleted"}"#).unwrap();
        assert_eq!(deleted.message, "Article 1 was deleted");
    }

    #[test]
    fn draft_serializes_without_id() {
        let article = Article {
            article_id: 3,
            title: "T".to_string(),
            text: "X".to_string(),
            topic: "React".to_string(),
        };
        let body = serde_json::to_value(article.draft()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "T", "text": "X", "topic": "React"}));
    }
}
