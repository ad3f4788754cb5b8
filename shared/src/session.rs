use crate::constants::MESSAGE_FAREWELL;
use crate::routes::Route;
use crate::types::{Article, ArticleId, Token};

/// UI state of one browser tab. Never mutated in place: every transition
/// produces the next value through [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub token: Option<Token>,
    pub message: String,
    pub spinner_on: bool,
    pub current_article_id: Option<ArticleId>,
    pub articles: Vec<Article>,
}

impl Session {
    pub fn with_token(token: Option<Token>) -> Self {
        Self { token, ..Session::default() }
    }

    /// A selection that points at a missing article counts as none.
    pub fn current_article(&self) -> Option<&Article> {
        self.current_article_id
            .and_then(|id| self.articles.iter().find(|article| article.article_id == id))
    }

    pub fn has_article(&self, article_id: ArticleId) -> bool {
        self.articles.iter().any(|article| article.article_id == article_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started,
    LoggedIn { token: Token, message: String },
    LoginFailed,
    LoggedOut,
    ArticlesLoaded { articles: Vec<Article>, message: String },
    ArticleCreated { article: Article, message: String },
    ArticleUpdated { article_id: ArticleId, article: Article, message: String },
    ArticleDeleted { article_id: ArticleId, message: String },
    RequestFailed,
    Selected(Option<ArticleId>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub session: Session,
    pub redirect: Option<Route>,
}

impl Step {
    fn stay(session: Session) -> Self {
        Self { session, redirect: None }
    }

    fn redirect(session: Session, route: Route) -> Self {
        Self { session, redirect: Some(route) }
    }
}

pub fn reduce(session: &Session, event: Event) -> Step {
    let mut next = session.clone();
    match event {
        Event::Started => {
            next.message.clear();
            next.spinner_on = true;
            Step::stay(next)
        }
        Event::LoggedIn { token, message } => {
            next.token = Some(token);
            next.message = message;
            next.spinner_on = false;
            Step::redirect(next, Route::Articles)
        }
        Event::LoginFailed => {
            next.spinner_on = false;
            Step::stay(next)
        }
        Event::LoggedOut => {
            next.token = None;
            next.message = MESSAGE_FAREWELL.to_string();
            Step::redirect(next, Route::Login)
        }
        Event::ArticlesLoaded { articles, message } => {
            next.articles = articles;
            next.message = message;
            next.spinner_on = false;
            drop_stale_selection(&mut next);
            Step::stay(next)
        }
        Event::ArticleCreated { article, message } => {
            next.articles.push(article);
            next.message = message;
            next.spinner_on = false;
            Step::stay(next)
        }
        Event::ArticleUpdated { article_id, article, message } => {
            next.articles = next.articles.into_iter()
                .map(|row| if row.article_id == article_id { article.clone() } else { row })
                .collect();
            next.message = message;
            next.spinner_on = false;
            drop_stale_selection(&mut next);
            Step::stay(next)
        }
        Event::ArticleDeleted { article_id, message } => {
            next.articles.retain(|row| row.article_id != article_id);
            next.message = message;
            next.spinner_on = false;
            drop_stale_selection(&mut next);
            Step::stay(next)
        }
        Event::RequestFailed => {
            next.spinner_on = false;
            Step::redirect(next, Route::Login)
        }
        Event::Selected(article_id) => {
            next.current_article_id = article_id.filter(|id| next.has_article(*id));
            Step::stay(next)
        }
    }
}

fn drop_stale_selection(session: &mut Session) {
    if let Some(id) = session.current_article_id {
        if !session.has_article(id) {
            session.current_article_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: ArticleId, title: &str) -> Article {
        Article {
            article_id: id,
            title: title.to_string(),
            text: format!("{title} text"),
            topic: "React".to_string(),
        }
    }

    fn loaded() -> Session {
        Session {
            token: Some("t".to_string()),
            message: "old".to_string(),
            articles: vec![article(1, "one"), article(2, "two"), article(3, "three")],
            ..Session::default()
        }
    }

    #[test]
    fn started_clears_message_and_turns_spinner_on() {
        let step = reduce(&loaded(), Event::Started);
        assert!(step.session.spinner_on);
        assert!(step.session.message.is_empty());
        assert_eq!(step.redirect, None);
        assert_eq!(step.session.articles.len(), 3);
    }

    #[test]
    fn login_success_redirects_to_articles() {
        let pending = reduce(&Session::default(), Event::Started).session;
        let step = reduce(&pending, Event::LoggedIn { token: "abc".to_string(), message: "Welcome".to_string() });
        assert_eq!(step.session.token.as_deref(), Some("abc"));
        assert_eq!(step.session.message, "Welcome");
        assert!(!step.session.spinner_on);
        assert_eq!(step.redirect, Some(Route::Articles));
    }

    #[test]
    fn login_failure_sets_no_message_and_stays() {
        let pending = reduce(&Session::default(), Event::Started).session;
        let step = reduce(&pending, Event::LoginFailed);
        assert!(step.session.message.is_empty());
        assert!(!step.session.spinner_on);
        assert_eq!(step.redirect, None);
    }

    #[test]
    fn logout_drops_token_and_says_goodbye() {
        let step = reduce(&loaded(), Event::LoggedOut);
        assert_eq!(step.session.token, None);
        assert_eq!(step.session.message, MESSAGE_FAREWELL);
        assert_eq!(step.redirect, Some(Route::Login));
    }

    #[test]
    fn update_replaces_only_matching_entry() {
        let replacement = article(2, "two edited");
        let step = reduce(&loaded(), Event::ArticleUpdated {
            article_id: 2,
            article: replacement.clone(),
            message: "updated".to_string(),
        });
        let articles = step.session.articles;
        assert_eq!(articles, vec![article(1, "one"), replacement, article(3, "three")]);
    }

    #[test]
    fn delete_clears_selection_of_removed_article() {
        let selected = reduce(&loaded(), Event::Selected(Some(2))).session;
        assert_eq!(selected.current_article().map(|a| a.article_id), Some(2));

        let step = reduce(&selected, Event::ArticleDeleted { article_id: 2, message: "gone".to_string() });
        assert_eq!(step.session.current_article_id, None);
        assert_eq!(step.session.articles.len(), 2);
        assert!(!step.session.has_article(2));
    }

    #[test]
    fn delete_keeps_unrelated_selection() {
        let selected = reduce(&loaded(), Event::Selected(Some(1))).session;
        let step = reduce(&selected, Event::ArticleDeleted { article_id: 3, message: "gone".to_string() });
        assert_eq!(step.session.current_article_id, Some(1));
    }

    #[test]
    fn selecting_unknown_article_means_no_selection() {
        let step = reduce(&loaded(), Event::Selected(Some(42)));
        assert_eq!(step.session.current_article_id, None);
        assert!(step.session.current_article().is_none());
    }

    #[test]
    fn stale_selection_reads_as_none() {
        let session = Session { current_article_id: Some(9), ..loaded() };
        assert!(session.current_article().is_none());
    }

    #[test]
    fn request_failure_redirects_to_login() {
        let pending = reduce(&loaded(), Event::Started).session;
        let step = reduce(&pending, Event::RequestFailed);
        assert!(!step.session.spinner_on);
        assert_eq!(step.redirect, Some(Route::Login));
        assert_eq!(step.session.articles.len(), 3);
    }
}
