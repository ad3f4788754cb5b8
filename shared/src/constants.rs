pub static ROOT_API: &'static str = match option_env!("ARTICLES_API_ROOT") {
    Some(root) => root,
    None => "http://localhost:9000/api",
};
pub static API_LOGIN: &'static str = "login";
pub static API_ARTICLES: &'static str = "articles";

pub static HEADER_AUTHORIZATION: &'static str = "Authorization";
pub static HEADER_CONTENT_TYPE: &'static str = "Content-Type";
pub static CONTENT_TYPE_JSON: &'static str = "application/json";

pub static STORAGE_TOKEN_KEY: &'static str = "token";

pub static MESSAGE_FAREWELL: &'static str = "Goodbye!";

pub static TOPICS: [&'static str; 3] = ["JavaScript", "React", "Node"];

pub const USERNAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 8;

pub fn api_url(path: &str) -> String {
    format!("{}/{}", ROOT_API.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn article_path(article_id: u64) -> String {
    format!("{API_ARTICLES}/{article_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_without_double_slash() {
        assert_eq!(api_url("/login"), format!("{}/login", ROOT_API.trim_end_matches('/')));
        assert!(!api_url(API_ARTICLES).contains("api//"));
    }

    #[test]
    fn article_path_embeds_id() {
        assert_eq!(article_path(7), "articles/7");
    }
}
