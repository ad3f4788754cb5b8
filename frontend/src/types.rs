use futures_signals::signal::Mutable;

use shared::types::{ArticleDraft, Credentials};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: Mutable<String>,
    pub password: Mutable<String>,
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.get_cloned(),
            password: self.password.get_cloned(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleForm {
    pub title: Mutable<String>,
    pub text: Mutable<String>,
    pub topic: Mutable<String>,
}

impl ArticleForm {
    pub fn draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.get_cloned(),
            text: self.text.get_cloned(),
            topic: self.topic.get_cloned(),
        }
    }

    pub fn fill(&self, draft: ArticleDraft) {
        self.title.set_neq(draft.title);
        self.text.set_neq(draft.text);
        self.topic.set_neq(draft.topic);
    }

    pub fn clear(&self) {
        self.fill(ArticleDraft::default());
    }
}
