pub mod app_root;
pub mod app_header;
pub mod app_message;
pub mod app_login;
pub mod app_articles;
pub mod article_form;
