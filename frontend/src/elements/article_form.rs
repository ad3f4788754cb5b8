use dominator::{clone, Dom, EventOptions, events, html};
use futures_signals::map_ref;
use futures_signals::signal::{Signal, SignalExt};

use shared::constants::TOPICS;
use shared::types::ArticleDraft;

use crate::constants::{PROP_DISABLED, PROP_ID, PROP_PLACEHOLDER, PROP_SELECTED, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_FORM, TAG_H2, TAG_INPUT, TAG_OPTION, TAG_SELECT, TAG_TEXTAREA};
use crate::loader::{article_create, article_select, article_update};
use crate::state::SESSION;
use crate::types::ArticleForm;
use crate::utils::value_from_target;

fn css_class(label: &str) -> String {
    format!("article-form__{label}")
}

pub fn article_form() -> Dom {
    let form = ArticleForm::default();
    html!(TAG_FORM, {
        .attr(PROP_ID, "form")
        .class(css_class("form"))
        .future(SESSION.signal_ref(|s| s.current_article().map(|article| article.draft()))
            .dedupe_cloned()
            .for_each(clone!(form => move |draft| {
                form.fill(draft.unwrap_or_default());
                futures::future::ready(())
            })))
        .event_with_options(&EventOptions::preventable(), clone!(form => move |e: events::Submit| {
            e.prevent_default();
            submit(&form);
        }))
        .children([
            html!(TAG_H2, {
                .text_signal(editing().map(|flag| if flag { "Edit Article" } else { "Create Article" }))
            }),
            html!(TAG_INPUT, {
                .attr(PROP_ID, "title")
                .class(css_class("input"))
                .attr(PROP_PLACEHOLDER, "Enter title")
                .attr("maxlength", "50")
                .prop_signal(PROP_VALUE, form.title.signal_cloned())
                .event(clone!(form => move |e: events::Input| {
                    form.title.set(value_from_target(e.target()));
                }))
            }),
            html!(TAG_TEXTAREA, {
                .attr(PROP_ID, "text")
                .class(css_class("input"))
                .attr(PROP_PLACEHOLDER, "Enter text")
                .attr("maxlength", "200")
                .prop_signal(PROP_VALUE, form.text.signal_cloned())
                .event(clone!(form => move |e: events::Input| {
                    form.text.set(value_from_target(e.target()));
                }))
            }),
            topic_select(&form),
            html!(TAG_DIV, {
                .class(css_class("buttons"))
                .child(html!(TAG_BUTTON, {
                    .attr(PROP_ID, "submitArticle")
                    .attr(PROP_TYPE, "submit")
                    .prop_signal(PROP_DISABLED, incomplete(&form))
                    .text("Submit")
                }))
                .child_signal(editing().map(clone!(form => move |flag| {
                    if flag { Some(cancel_button(&form)) } else { None }
                })))
            }),
        ])
    })
}

fn topic_select(form: &ArticleForm) -> Dom {
    let options = std::iter::once(("", "-- Select topic --"))
        .chain(TOPICS.iter().map(|topic| (*topic, *topic)))
        .map(|(value, label)| html!(TAG_OPTION, {
            .attr(PROP_VALUE, value)
            .prop_signal(PROP_SELECTED, form.topic.signal_ref(move |topic| topic == value))
            .text(label)
        }))
        .collect::<Vec<_>>();

    html!(TAG_SELECT, {
        .attr(PROP_ID, "topic")
        .class(css_class("select"))
        .children(options)
        .event(clone!(form => move |e: events::Change| {
            form.topic.set(value_from_target(e.target()));
        }))
    })
}

fn cancel_button(form: &ArticleForm) -> Dom {
    html!(TAG_BUTTON, {
        .attr(PROP_TYPE, "button")
        .class(css_class("button"))
        .text("Cancel edit")
        .event(clone!(form => move |_: events::Click| {
            form.clear();
            article_select(None);
        }))
    })
}

fn editing() -> impl Signal<Item=bool> {
    SESSION.signal_ref(|s| s.current_article().is_some()).dedupe()
}

fn incomplete(form: &ArticleForm) -> impl Signal<Item=bool> {
    map_ref! {
        let title = form.title.signal_cloned(),
        let text = form.text.signal_cloned(),
        let topic = form.topic.signal_cloned() =>
        !ArticleDraft { title: title.clone(), text: text.clone(), topic: topic.clone() }.is_complete()
    }
}

fn submit(form: &ArticleForm) {
    let draft = form.draft();
    if !draft.is_complete() {
        return;
    }
    let current = SESSION.lock_ref().current_article().map(|article| article.article_id);
    form.clear();
    article_select(None);
    match current {
        Some(article_id) => article_update(article_id, draft),
        None => article_create(draft),
    }
}
