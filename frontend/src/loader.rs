use wasm_bindgen_futures::spawn_local;

use shared::controller::Controller;
use shared::types::{ArticleDraft, ArticleId, Credentials};

use crate::connect_fetch::FetchApi;
use crate::state::DomHost;
use crate::token_store::LocalTokenStore;

fn controller() -> Controller<FetchApi, LocalTokenStore, DomHost> {
    Controller::new(FetchApi::new(LocalTokenStore), LocalTokenStore, DomHost)
}

pub fn login(credentials: Credentials) {
    spawn_local(async move {
        controller().login(credentials).await;
    });
}

pub fn logout() {
    controller().logout();
}

// ===

pub fn articles_load() {
    spawn_local(async move {
        controller().fetch_articles().await;
    });
}

pub fn article_create(draft: ArticleDraft) {
    spawn_local(async move {
        controller().create_article(draft).await;
    });
}

pub fn article_update(article_id: ArticleId, draft: ArticleDraft) {
    spawn_local(async move {
        controller().update_article(article_id, draft).await;
    });
}

pub fn article_delete(article_id: ArticleId) {
    spawn_local(async move {
        controller().delete_article(article_id).await;
    });
}

pub fn article_select(article_id: Option<ArticleId>) {
    controller().select_article(article_id);
}
