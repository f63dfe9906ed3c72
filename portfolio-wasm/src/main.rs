use crate::board::{NoticeDialog, QnaBoard};
use crate::feed::{FeedSource, HttpFeed};
use dioxus::prelude::*;
use portfolio_board::contact::ContactMessage;
use portfolio_board::feed::FEED_UNAVAILABLE;
use portfolio_board::layout::{
    NAVBAR_SHADOW_RESTING, navbar_shadow, reveal_observer_script, reveal_style, scroll_target,
};
use portfolio_board::SiteConfig;
use tracing::{info, warn};

mod board;
mod error;
mod feed;
mod storage;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("about", "About"),
    ("projects", "Projects"),
    ("qna", "Q&A"),
    ("contact", "Contact"),
];

const ABOUT_ITEMS: [(&str, &str); 3] = [
    ("Systems", "Command-line tools, parsers and storage engines."),
    ("Web", "Single-page apps compiled to WebAssembly."),
    ("Craft", "Small, tested, well-documented code."),
];

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SiteConfig::default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Smoothly scrolls to the element with `id`, leaving room for the fixed header.
pub(crate) fn scroll_to_section(id: impl Into<String>, header_offset: f64) {
    let id = id.into();
    spawn(async move {
        let probe = format!(
            "const t = document.getElementById('{id}'); \
             return t ? [t.getBoundingClientRect().top, window.pageYOffset] : null;"
        );
        match document::eval(&probe).join::<Option<(f64, f64)>>().await {
            Ok(Some((top, page_offset))) => {
                let target = scroll_target(top, page_offset, header_offset);
                let _ = document::eval(&format!(
                    "window.scrollTo({{ top: {target}, behavior: 'smooth' }});"
                ));
            }
            Ok(None) => {}
            Err(e) => warn!(section = %id, error = ?e, "failed to locate section"),
        }
    });
}

/// Starts watching every `.reveal` element that is not visible yet.
fn observe_reveals(script: String) {
    spawn(async move {
        if let Err(e) = document::eval(&script).join::<serde_json::Value>().await {
            warn!(error = ?e, "failed to observe reveal elements");
        }
    });
}

/// Quotes `s` as a JavaScript string literal.
fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

#[component]
fn Navbar() -> Element {
    let config = use_context::<SiteConfig>();
    let mut menu_open = use_signal(|| false);
    let mut shadow = use_signal(|| NAVBAR_SHADOW_RESTING);
    let header_offset = config.header_offset;
    let threshold = config.navbar_threshold;

    use_future(move || async move {
        let mut scroll = document::eval(
            r#"
            const report = () => dioxus.send(window.pageYOffset);
            window.addEventListener("scroll", report, { passive: true });
            report();
            await new Promise(() => {});
            "#,
        );
        while let Ok(y) = scroll.recv::<f64>().await {
            shadow.set(navbar_shadow(y, threshold));
        }
    });

    rsx! {
        nav { class: "navbar", style: "box-shadow: {shadow}",
            div { class: "nav-container",
                a {
                    class: "logo",
                    href: "#home",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        menu_open.set(false);
                        scroll_to_section("home", header_offset);
                    },
                    "Portfolio"
                }
                button {
                    class: if menu_open() { "mobile-menu-btn active" } else { "mobile-menu-btn" },
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    onclick: move |_| menu_open.toggle(),
                    span {}
                    span {}
                    span {}
                }
                ul { class: if menu_open() { "nav-links active" } else { "nav-links" },
                    for (id, label) in NAV_SECTIONS {
                        li { key: "{id}",
                            a {
                                href: "#{id}",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    menu_open.set(false);
                                    scroll_to_section(id, header_offset);
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        Hero {}
        About {}
        Projects {}
        QnaBoard {}
        Contact {}
        footer { class: "footer", p { "Built with Rust and Dioxus." } }
    }
}

#[component]
fn Hero() -> Element {
    let header_offset = use_context::<SiteConfig>().header_offset;

    rsx! {
        section { id: "home", class: "hero",
            div { class: "container",
                h1 { class: "hero-title", "Hello, I build things for the web." }
                p { class: "hero-subtitle", "Projects, notes and a place to ask questions." }
                a {
                    class: "btn btn-primary",
                    href: "#projects",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        scroll_to_section("projects", header_offset);
                    },
                    "See my work"
                }
            }
        }
    }
}

#[component]
fn About() -> Element {
    let config = use_context::<SiteConfig>();
    let step = config.reveal_step;
    let reveal_script = reveal_observer_script(config.reveal_threshold, &config.reveal_root_margin);

    use_effect(move || observe_reveals(reveal_script.clone()));

    rsx! {
        section { id: "about", class: "section about",
            div { class: "container",
                h2 { class: "section-title", "About" }
                p { class: "about-intro reveal", style: reveal_style(0, step),
                    "I am a developer who enjoys turning small ideas into dependable software."
                }
                div { class: "about-grid",
                    for (index, (heading, text)) in ABOUT_ITEMS.into_iter().enumerate() {
                        div { key: "{heading}", class: "about-card reveal", style: reveal_style(index + 1, step),
                            h3 { "{heading}" }
                            p { "{text}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Projects() -> Element {
    let config = use_context::<SiteConfig>();
    let step = config.project_reveal_step;
    let reveal_script = reveal_observer_script(config.reveal_threshold, &config.reveal_root_margin);

    let projects = use_resource(move || {
        let feed = HttpFeed::new(config.feed_url.clone());
        async move {
            feed.projects()
                .await
                .inspect(|projects| info!(count = projects.len(), "projects loaded"))
                .inspect_err(|e| warn!(error = %e, "failed to load projects"))
        }
    });

    // Cards mount once the feed resolves; watch them then.
    use_effect(move || {
        if matches!(projects.read().as_ref(), Some(Ok(_))) {
            observe_reveals(reveal_script.clone());
        }
    });

    rsx! {
        section { id: "projects", class: "section projects",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { class: "projects-grid",
                    match projects.read().as_ref() {
                        Some(Ok(projects)) => rsx! {
                            for (index, project) in projects.iter().enumerate() {
                                div { key: "{index}", class: "project-card reveal", style: reveal_style(index, step),
                                    div { class: "project-image-wrapper",
                                        img { class: "project-image", src: "{project.image}", alt: "{project.title}" }
                                    }
                                    div { class: "project-content",
                                        h3 { class: "project-title", "{project.title}" }
                                        p { class: "project-description", "{project.description}" }
                                        div { class: "project-tags",
                                            for tag in project.tags.iter() {
                                                span { class: "project-tag", "{tag}" }
                                            }
                                        }
                                        a {
                                            class: "project-link",
                                            href: "{project.link}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "View project →"
                                        }
                                    }
                                }
                            }
                        },
                        Some(Err(_)) => rsx! { p { class: "projects-error", "{FEED_UNAVAILABLE}" } },
                        None => rsx! { p { class: "projects-loading", "Loading projects..." } },
                    }
                }
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    let recipient = use_context::<SiteConfig>().contact_email;
    let mut notice = use_signal(|| None::<String>);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let contact = ContactMessage {
            name: name(),
            email: email(),
            subject: subject(),
            message: message(),
        };
        match contact.mailto(&recipient) {
            Ok(link) => {
                let _ = document::eval(&format!("window.location.href = {};", js_string(&link)));
                name.set(String::new());
                email.set(String::new());
                subject.set(String::new());
                message.set(String::new());
            }
            Err(e) => {
                warn!(error = %e, "contact form incomplete");
                notice.set(Some("Please fill in every field.".to_string()));
            }
        }
    };

    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "container",
                h2 { class: "section-title", "Contact" }
                form { class: "contact-form", onsubmit: on_submit,
                    input {
                        r#type: "text",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Subject",
                        value: "{subject}",
                        oninput: move |evt| subject.set(evt.value()),
                    }
                    textarea {
                        placeholder: "Message",
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Send" }
                }
            }
            if let Some(text) = notice() {
                NoticeDialog { message: text, on_close: move |_| notice.set(None) }
            }
        }
    }
}
