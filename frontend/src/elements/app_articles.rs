use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use wasm_bindgen_futures::spawn_local;

use shared::controller::TokenStore;
use shared::routes::Route;
use shared::types::Article;

use crate::constants::{PROP_DISABLED, PROP_ID, TAG_BUTTON, TAG_DIV, TAG_H2, TAG_H3, TAG_SPAN};
use crate::elements::article_form::article_form;
use crate::loader::{article_delete, article_select, articles_load};
use crate::router::go_to;
use crate::state::SESSION;
use crate::token_store::LocalTokenStore;
use crate::utils::set_title;

fn css_class(label: &str) -> String {
    format!("app-articles__{label}")
}

pub fn articles_page() -> Dom {
    if LocalTokenStore.get().is_none() {
        log::info!("articles_page: no token");
        spawn_local(async {
            go_to(Route::Login);
        });
        return html!(TAG_DIV);
    }
    set_title("Articles");
    articles_load();
    html!(TAG_DIV, {
        .class(css_class("page"))
        .children([article_form(), articles_list()])
    })
}

fn articles_list() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_H2, { .text("Articles") }))
        .child_signal(SESSION.signal_ref(|s| s.articles.clone()).dedupe_cloned().map(|articles| {
            if articles.is_empty() {
                Some(html!(TAG_DIV, { .text("No articles yet") }))
            } else {
                Some(html!(TAG_DIV, {
                    .children(articles.into_iter().map(article_view))
                }))
            }
        }))
    })
}

fn article_view(article: Article) -> Dom {
    let article_id = article.article_id;
    html!(TAG_DIV, {
        .class(css_class("article"))
        .children([
            html!(TAG_DIV, {
                .children([
                    html!(TAG_H3, { .text(&article.title) }),
                    html!("p", { .text(&article.text) }),
                    html!("p", {
                        .child(html!(TAG_SPAN, { .text("Topic: ") }))
                        .text(&article.topic)
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .children([
                    html!(TAG_BUTTON, {
                        .attr(PROP_ID, &format!("edit-{article_id}"))
                        .class(css_class("button"))
                        .prop_signal(PROP_DISABLED, SESSION.signal_ref(|s| s.current_article_id.is_some()))
                        .text("Edit")
                        .event(move |_: events::Click| article_select(Some(article_id)))
                    }),
                    html!(TAG_BUTTON, {
                        .attr(PROP_ID, &format!("delete-{article_id}"))
                        .class(css_class("button"))
                        .prop_signal(PROP_DISABLED, SESSION.signal_ref(|s| s.current_article_id.is_some()))
                        .text("Delete")
                        .event(move |_: events::Click| article_delete(article_id))
                    }),
                ])
            }),
        ])
    })
}
