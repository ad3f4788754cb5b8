use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use shared::constants::{API_ARTICLES, API_LOGIN, api_url, article_path, CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE};
use shared::controller::{ArticlesApi, TokenStore};
use shared::error::ApiError;
use shared::types::{ArticleDraft, ArticleId, ArticleResponse, ArticlesResponse, Credentials, LoginResponse, MessageResponse};

use crate::token_store::LocalTokenStore;

const METHOD_GET: &str = "GET";
const METHOD_POST: &str = "POST";
const METHOD_PUT: &str = "PUT";
const METHOD_DELETE: &str = "DELETE";

/// `window.fetch` against the articles service, carrying the stored token.
#[derive(Clone, Default)]
pub struct FetchApi {
    tokens: LocalTokenStore,
}

impl FetchApi {
    pub fn new(tokens: LocalTokenStore) -> Self {
        Self { tokens }
    }

    async fn json<R>(&self, method: &str, path: &str, data: Option<JsValue>) -> Result<R, ApiError>
        where
            R: DeserializeOwned
    {
        let json = send(method, path, data, self.tokens.get()).await?;
        serde_wasm_bindgen::from_value::<R>(json).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl ArticlesApi for FetchApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.json(METHOD_POST, API_LOGIN, Some(to_body(credentials)?)).await
    }

    async fn articles(&self) -> Result<ArticlesResponse, ApiError> {
        self.json(METHOD_GET, API_ARTICLES, None).await
    }

    async fn create_article(&self, draft: &ArticleDraft) -> Result<ArticleResponse, ApiError> {
        self.json(METHOD_POST, API_ARTICLES, Some(to_body(draft)?)).await
    }

    async fn update_article(&self, article_id: ArticleId, draft: &ArticleDraft) -> Result<ArticleResponse, ApiError> {
        self.json(METHOD_PUT, &article_path(article_id), Some(to_body(draft)?)).await
    }

    async fn delete_article(&self, article_id: ArticleId) -> Result<MessageResponse, ApiError> {
        self.json(METHOD_DELETE, &article_path(article_id), None).await
    }
}

fn to_body<T: Serialize>(data: &T) -> Result<JsValue, ApiError> {
    serde_wasm_bindgen::to_value(data).map_err(|err| {
        log::error!("to_body: {:?}", err);
        ApiError::Decode(err.to_string())
    })
}

fn network(err: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

async fn send(method: &str, path: &str, data: Option<JsValue>, token: Option<String>) -> Result<JsValue, ApiError> {
    let mut opts = RequestInit::new();
    opts.method(method);
    opts.mode(RequestMode::Cors);
    if let Some(data) = data {
        let data = js_sys::JSON::stringify(&data).map_err(|err| {
            log::error!("send: {:?}", err);
            ApiError::Decode(format!("{method} {path}: body is not serializable"))
        })?;
        opts.body(Some(&data));
    }

    let request = Request::new_with_str_and_init(&api_url(path), &opts).map_err(network)?;
    request.headers().set(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON).map_err(network)?;
    if let Some(token) = token {
        request.headers().set(HEADER_AUTHORIZATION, &token).map_err(network)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(network)?;
    let resp: Response = resp_value.dyn_into().map_err(network)?;

    let json = match resp.json() {
        Ok(promise) => JsFuture::from(promise).await.ok(),
        Err(_) => None
    };

    if !resp.ok() {
        let message = json
            .and_then(|data| serde_wasm_bindgen::from_value::<MessageResponse>(data).ok())
            .map(|data| data.message);
        return Err(ApiError::from_status(resp.status(), message));
    }

    json.ok_or_else(|| ApiError::Decode(format!("{method} {path}: body is not json")))
}
