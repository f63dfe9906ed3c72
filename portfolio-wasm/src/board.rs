use crate::scroll_to_section;
use crate::storage::LocalStore;
use dioxus::prelude::*;
use portfolio_board::render::EMPTY_STATE_TEXT;
use portfolio_board::{BoardController, CardView, QuestionId, SiteConfig};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerSubmission {
    pub question_id: QuestionId,
    pub author: String,
    pub content: String,
}

#[component]
pub fn QnaBoard() -> Element {
    let config = use_context::<SiteConfig>();
    let mut board =
        use_signal(move || BoardController::new(LocalStore::new(config.storage_key.clone())));
    let mut notice = use_signal(|| None::<String>);

    let mut author = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);

    let on_ask = move |evt: FormEvent| {
        evt.prevent_default();
        let result = board
            .write()
            .create_question(&author.read(), &title.read(), &content.read());
        match result {
            Ok(_) => {
                author.set(String::new());
                title.set(String::new());
                content.set(String::new());
            }
            Err(e) => {
                warn!(error = %e, "question rejected");
                notice.set(Some(e.user_message()));
            }
        }
    };

    let on_answer = move |submission: AnswerSubmission| {
        let result = board.write().submit_answer(
            submission.question_id,
            &submission.author,
            &submission.content,
        );
        if let Err(e) = result {
            warn!(error = %e, question_id = %submission.question_id, "answer rejected");
            notice.set(Some(e.user_message()));
        }
    };

    let on_toggle = move |id: QuestionId| {
        board.write().toggle(id);
    };

    let view = board.read().view();
    let generation = board.read().generation();

    rsx! {
        section { id: "qna", class: "section qna",
            div { class: "container",
                h2 { class: "section-title", "Q&A" }
                p { class: "section-subtitle", "Ask anything. Questions stay in this browser." }

                form { class: "qna-form", onsubmit: on_ask,
                    input {
                        r#type: "text",
                        placeholder: "Your name",
                        value: "{author}",
                        oninput: move |evt| author.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Question title",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                    textarea {
                        placeholder: "What would you like to know?",
                        value: "{content}",
                        oninput: move |evt| content.set(evt.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Ask question" }
                }

                p { class: "qna-empty", hidden: !view.show_empty_state, "{EMPTY_STATE_TEXT}" }

                div { class: "qna-list",
                    // Cards are keyed by generation so each mutation rebuilds all of them.
                    for card in view.cards {
                        QuestionCard {
                            key: "{card.id}-{generation}",
                            card: card.clone(),
                            on_toggle,
                            on_answer,
                        }
                    }
                }
            }

            if let Some(message) = notice() {
                NoticeDialog { message, on_close: move |_| notice.set(None) }
            }
        }
    }
}

#[component]
fn QuestionCard(
    card: CardView,
    on_toggle: EventHandler<QuestionId>,
    on_answer: EventHandler<AnswerSubmission>,
) -> Element {
    let header_offset = use_context::<SiteConfig>().header_offset;
    let mut author = use_signal(String::new);
    let mut content = use_signal(String::new);
    let id = card.id;
    let focused = card.focused;

    rsx! {
        article {
            id: "question-{id}",
            class: if card.expanded { "qna-card open" } else { "qna-card" },
            onmounted: move |_| {
                if focused {
                    scroll_to_section(format!("question-{id}"), header_offset);
                }
            },

            button {
                class: "qna-toggle",
                r#type: "button",
                "aria-expanded": "{card.expanded}",
                onclick: move |_| on_toggle.call(id),
                h3 { class: "qna-title", dangerous_inner_html: "{card.title_html}" }
                span {
                    class: "qna-meta",
                    dangerous_inner_html: "{card.author_html} &middot; {card.date_label}",
                }
                span { class: "qna-count", "{card.answer_count_label()}" }
            }

            div { class: "qna-panel",
                p { class: "qna-content", dangerous_inner_html: "{card.content_html}" }

                ul { class: "qna-answers",
                    for answer in card.answers.iter() {
                        li { key: "{answer.id}", class: "qna-answer",
                            span {
                                class: "qna-meta",
                                dangerous_inner_html: "{answer.author_html} &middot; {answer.date_label}",
                            }
                            p { dangerous_inner_html: "{answer.content_html}" }
                        }
                    }
                }

                form {
                    class: "qna-answer-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_answer.call(AnswerSubmission {
                            question_id: id,
                            author: author(),
                            content: content(),
                        });
                    },
                    input {
                        r#type: "text",
                        placeholder: "Your name",
                        value: "{author}",
                        oninput: move |evt| author.set(evt.value()),
                    }
                    textarea {
                        placeholder: "Write an answer",
                        value: "{content}",
                        oninput: move |evt| content.set(evt.value()),
                    }
                    button { class: "btn", r#type: "submit", "Post answer" }
                }
            }
        }
    }
}

#[component]
pub fn NoticeDialog(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "notice-backdrop", role: "alertdialog",
            div { class: "notice",
                p { "{message}" }
                button { class: "btn btn-primary", r#type: "button", onclick: move |_| on_close.call(()), "OK" }
            }
        }
    }
}
