use crate::error::ApiError;
use crate::routes::Route;
use crate::session::{Event, reduce, Session};
use crate::types::{ArticleDraft, ArticleId, ArticleResponse, ArticlesResponse, Credentials, LoginResponse, MessageResponse, Token};

/// Request layer of the articles service. Implementations attach the stored
/// token themselves and hand failures back untouched.
#[allow(async_fn_in_trait)]
pub trait ArticlesApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
    async fn articles(&self) -> Result<ArticlesResponse, ApiError>;
    async fn create_article(&self, draft: &ArticleDraft) -> Result<ArticleResponse, ApiError>;
    async fn update_article(&self, article_id: ArticleId, draft: &ArticleDraft) -> Result<ArticleResponse, ApiError>;
    async fn delete_article(&self, article_id: ArticleId) -> Result<MessageResponse, ApiError>;
}

pub trait TokenStore {
    fn get(&self) -> Option<Token>;
    fn set(&self, token: &str);
    fn remove(&self);
}

/// Owner of the current [`Session`] value and of the visible route.
pub trait SessionHost {
    fn session(&self) -> Session;
    fn replace(&self, session: Session);
    fn navigate(&self, route: Route);
}

pub struct Controller<A, T, H> {
    api: A,
    tokens: T,
    host: H,
}

impl<A, T, H> Controller<A, T, H>
    where
        A: ArticlesApi,
        T: TokenStore,
        H: SessionHost
{
    pub fn new(api: A, tokens: T, host: H) -> Self {
        Self { api, tokens, host }
    }

    fn apply(&self, event: Event) {
        let step = reduce(&self.host.session(), event);
        self.host.replace(step.session);
        if let Some(route) = step.redirect {
            self.host.navigate(route);
        }
    }

    fn failed(&self, operation: &str, err: ApiError) {
        if err.is_auth_expiry() {
            log::warn!("{operation}: token rejected, back to login");
        } else {
            log::error!("{operation}: {err}");
        }
        self.apply(Event::RequestFailed);
    }

    pub async fn login(&self, credentials: Credentials) {
        log::debug!("login: {}", credentials.username);
        self.apply(Event::Started);
        match self.api.login(&credentials).await {
            Ok(data) => {
                self.tokens.set(&data.token);
                log::info!("login: {}", data.message);
                self.apply(Event::LoggedIn { token: data.token, message: data.message });
            }
            Err(err) => {
                log::error!("login: {err}");
                self.apply(Event::LoginFailed);
            }
        }
    }

    pub fn logout(&self) {
        self.tokens.remove();
        log::info!("logout");
        self.apply(Event::LoggedOut);
    }

    pub async fn fetch_articles(&self) {
        log::debug!("fetch_articles");
        self.apply(Event::Started);
        match self.api.articles().await {
            Ok(data) => {
                log::info!("fetch_articles: {} received", data.articles.len());
                self.apply(Event::ArticlesLoaded { articles: data.articles, message: data.message });
            }
            Err(err) => self.failed("fetch_articles", err),
        }
    }

    pub async fn create_article(&self, draft: ArticleDraft) {
        log::debug!("create_article: {}", draft.title);
        self.apply(Event::Started);
        match self.api.create_article(&draft).await {
            Ok(data) => {
                log::info!("create_article: {}", data.article.article_id);
                self.apply(Event::ArticleCreated { article: data.article, message: data.message });
            }
            Err(err) => self.failed("create_article", err),
        }
    }

    pub async fn update_article(&self, article_id: ArticleId, draft: ArticleDraft) {
        log::debug!("update_article: {article_id}");
        self.apply(Event::Started);
        match self.api.update_article(article_id, &draft).await {
            Ok(data) => {
                log::info!("update_article: {article_id}");
                self.apply(Event::ArticleUpdated { article_id, article: data.article, message: data.message });
            }
            Err(err) => self.failed("update_article", err),
        }
    }

    pub async fn delete_article(&self, article_id: ArticleId) {
        log::debug!("delete_article: {article_id}");
        self.apply(Event::Started);
        match self.api.delete_article(article_id).await {
            Ok(data) => {
                log::info!("delete_article: {article_id}");
                self.apply(Event::ArticleDeleted { article_id, message: data.message });
            }
            Err(err) => self.failed("delete_article", err),
        }
    }

    pub fn select_article(&self, article_id: Option<ArticleId>) {
        self.apply(Event::Selected(article_id));
    }
}
