use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::effects::{card_lift, card_rest, spawn_ripple, ThemeToggle, TypedTitle};
use crate::components::nav::Nav;
use crate::components::notification::{Notice, NoticeKind, NotificationToast};
use crate::scroll;

const SERVICES: [(&str, &str); 3] = [
    (
        "Web Development",
        "Responsive, performant sites built with modern tooling and clean markup.",
    ),
    (
        "API Design",
        "Well-documented interfaces that are a pleasure to build against.",
    ),
    (
        "Consulting",
        "Architecture reviews and pragmatic advice for teams shipping on a deadline.",
    ),
];

const STATS: [(&str, &str); 3] = [
    ("50+", "Projects Completed"),
    ("8", "Years of Experience"),
    ("30+", "Happy Clients"),
];

const SKILLS: [&str; 8] = [
    "Rust",
    "WebAssembly",
    "TypeScript",
    "PostgreSQL",
    "GraphQL",
    "Docker",
    "CI/CD",
    "UX Writing",
];

#[function_component(Home)]
pub fn home() -> Html {
    let active_section = use_state_eq(|| None::<AttrValue>);
    let notice = use_state(|| None::<Notice>);
    let notice_seq = use_mut_ref(|| 0u32);

    // scroll spy, reveal animations and parallax share one listener; the
    // initial pass makes above-the-fold state correct before any scroll
    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let run = move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    if let Some(id) = scroll::spy_target(scroll_y, &scroll::section_spans(&document))
                    {
                        active_section.set(Some(AttrValue::from(id.to_string())));
                    }
                    let viewport = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|value| value.as_f64())
                        .unwrap_or(0.0);
                    scroll::reveal_visible(&document, viewport);
                    scroll::apply_parallax(&document, scroll_y);
                };
                run();

                let scroll_callback = Closure::wrap(Box::new(run) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let on_select = {
        let active_section = active_section.clone();
        Callback::from(move |id: AttrValue| active_section.set(Some(id)))
    };

    let on_notify = {
        let notice = notice.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |(message, kind): (String, NoticeKind)| {
            let mut seq = notice_seq.borrow_mut();
            *seq += 1;
            // replaces any live toast; the new key remounts the component
            notice.set(Some(Notice {
                id: *seq,
                message,
                kind,
            }));
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |id: u32| {
            if (*notice).as_ref().map(|n| n.id) == Some(id) {
                notice.set(None);
            }
        })
    };

    let ripple = Callback::from(|e: MouseEvent| spawn_ripple(&e));
    let lift = Callback::from(card_lift);
    let rest = Callback::from(card_rest);

    html! {
        <>
            <Nav active={(*active_section).clone()} on_select={on_select} />

            <section id="home" class="hero">
                <div class="hero-content">
                    <TypedTitle text="Hi, I'm Jane Doe" />
                    <p class="hero-subtitle">
                        {"Full-stack developer crafting fast, friendly web experiences."}
                    </p>
                    <a href="#contact" class="btn btn-primary" onclick={ripple.clone()}>
                        {"Get in Touch"}
                    </a>
                </div>
                <div class="hero-placeholder"></div>
            </section>

            <section id="about" class="about">
                <h2>{"About Me"}</h2>
                <p>
                    {"I design and build web products end to end, from the database \
                      to the last CSS transition. I care about small bundles, honest \
                      copy, and interfaces that stay out of the way."}
                </p>
                <div class="stats">
                    { for STATS.iter().map(|&(value, label)| html! {
                        <div class="stat">
                            <span class="stat-value">{ value }</span>
                            <span class="stat-label">{ label }</span>
                        </div>
                    }) }
                </div>
            </section>

            <section id="services" class="services">
                <h2>{"Services"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|&(title, blurb)| html! {
                        <div
                            class="service-card"
                            onmouseenter={lift.clone()}
                            onmouseleave={rest.clone()}
                        >
                            <h3>{ title }</h3>
                            <p>{ blurb }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="skills" class="skills">
                <h2>{"Skills"}</h2>
                <div class="skill-tags">
                    { for SKILLS.iter().map(|&skill| html! {
                        <span class="skill-tag">{ skill }</span>
                    }) }
                </div>
            </section>

            <section id="contact" class="contact">
                <h2>{"Get in Touch"}</h2>
                <ContactForm on_notify={on_notify} />
            </section>

            <footer class="footer">
                <p>{"© 2026 Jane Doe. Built with Rust and WebAssembly."}</p>
            </footer>

            <ThemeToggle />

            {
                if let Some(current) = (*notice).clone() {
                    html! {
                        <NotificationToast
                            key={current.id}
                            notice={current.clone()}
                            on_dismiss={on_dismiss}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
