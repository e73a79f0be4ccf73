use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

const RIPPLE_MS: u32 = 600;

/// Spawns an expanding circle at the click point inside the clicked control.
/// Rapid clicks stack ripples; each one removes only its own overlay, so the
/// cleanup timer can safely fire-and-forget.
pub fn spawn_ripple(event: &MouseEvent) {
    let Some(target) = event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let rect = target.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = f64::from(event.client_x()) - rect.left() - size / 2.0;
    let y = f64::from(event.client_y()) - rect.top() - size / 2.0;

    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let _ = ripple.set_attribute(
        "style",
        &format!(
            "position: absolute; width: {size}px; height: {size}px; \
             left: {x}px; top: {y}px; background: rgba(255, 255, 255, 0.3); \
             border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;"
        ),
    );
    let _ = target.style().set_property("position", "relative");
    let _ = target.style().set_property("overflow", "hidden");
    if target.append_child(&ripple).is_ok() {
        Timeout::new(RIPPLE_MS, move || ripple.remove()).forget();
    }
}

/// Enlarge-and-lift treatment while the pointer is over a card.
pub fn card_lift(event: MouseEvent) {
    if let Some(card) = event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    {
        let style = card.style();
        let _ = style.set_property("transform", "translateY(-15px) scale(1.02)");
        let _ = style.set_property("box-shadow", "0 25px 50px rgba(0, 0, 0, 0.2)");
    }
}

pub fn card_rest(event: MouseEvent) {
    if let Some(card) = event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    {
        let style = card.style();
        let _ = style.set_property("transform", "translateY(0) scale(1)");
        let _ = style.set_property("box-shadow", "0 4px 20px rgba(0, 0, 0, 0.1)");
    }
}

const TYPE_START_DELAY_MS: u32 = 1_000;
const TYPE_TICK_MS: u32 = 100;
const CURSOR_LINGER_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
pub struct TypedTitleProps {
    pub text: AttrValue,
}

/// Hero title that types itself out once per page load: the full text shows
/// for a second, is cleared, then comes back one character every 100 ms with
/// a cursor border that lingers briefly after the last character.
#[function_component(TypedTitle)]
pub fn typed_title(props: &TypedTitleProps) -> Html {
    let started = use_state_eq(|| false);
    let shown = use_state_eq(|| 0usize);
    let cursor = use_state_eq(|| true);
    let start_timer = use_mut_ref(|| None::<Timeout>);
    let step_timer = use_mut_ref(|| None::<Timeout>);

    let total = props.text.chars().count();

    {
        let started_setter = started.setter();
        let start_timer = start_timer.clone();
        use_effect_with_deps(
            move |_| {
                *start_timer.borrow_mut() = Some(Timeout::new(TYPE_START_DELAY_MS, move || {
                    started_setter.set(true);
                }));
                move || {
                    start_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let shown_handle = shown.clone();
        let cursor_setter = cursor.setter();
        let step_timer = step_timer.clone();
        use_effect_with_deps(
            move |deps: &(bool, usize)| {
                let (started_now, shown_now) = *deps;
                if started_now {
                    let timer = if shown_now < total {
                        Timeout::new(TYPE_TICK_MS, move || shown_handle.set(shown_now + 1))
                    } else {
                        Timeout::new(CURSOR_LINGER_MS, move || cursor_setter.set(false))
                    };
                    *step_timer.borrow_mut() = Some(timer);
                }
                move || {
                    step_timer.borrow_mut().take();
                }
            },
            (*started, *shown),
        );
    }

    let (visible, style) = if !*started {
        (props.text.to_string(), "")
    } else {
        let typed: String = props.text.chars().take(*shown).collect();
        let border = if *cursor {
            "border-right: 2px solid #6366f1;"
        } else {
            "border-right: none;"
        };
        (typed, border)
    };

    html! {
        <h1 class="hero-title" style={style}>{ visible }</h1>
    }
}

/// Floating dark-mode control. The dark treatment is a global invert filter
/// keyed off a body class; it is not persisted across reloads.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let dark = use_state(|| false);

    let onclick = {
        let dark = dark.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*dark;
            if let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            {
                let class_list = body.class_list();
                let _ = if next {
                    class_list.add_1("dark-theme")
                } else {
                    class_list.remove_1("dark-theme")
                };
            }
            dark.set(next);
        })
    };

    html! {
        <button class="theme-toggle" onclick={onclick}>
            { if *dark { "☀️" } else { "🌙" } }
        </button>
    }
}
