use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

/// Viewport width above which the collapsible menu no longer applies.
const MOBILE_BREAKPOINT: f64 = 768.0;

fn set_body_class(name: &str, on: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        let class_list = body.class_list();
        let _ = if on {
            class_list.add_1(name)
        } else {
            class_list.remove_1(name)
        };
    }
}

/// Scrolls the window so the section sits just below the fixed header.
/// Returns false (a silent no-op) when the section does not exist.
fn scroll_to_section(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(section) = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    let header_height = document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height())
        .unwrap_or(0);

    let options = ScrollToOptions::new();
    options.set_top(f64::from(section.offset_top() - header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// Id of the section whose link carries the `active` class, if any.
    pub active: Option<AttrValue>,
    pub on_select: Callback<AttrValue>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state_eq(|| false);

    // force the menu closed when the viewport widens past the breakpoint
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let resize_callback = Closure::wrap(Box::new(move || {
                    let width = window_clone
                        .inner_width()
                        .ok()
                        .and_then(|value| value.as_f64())
                        .unwrap_or(0.0);
                    if width > MOBILE_BREAKPOINT {
                        menu_open.set(false);
                        set_body_class("menu-open", false);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let open = !*menu_open;
            menu_open.set(open);
            set_body_class("menu-open", open);
        })
    };

    let link_click = |id: &'static str| {
        let menu_open = menu_open.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if scroll_to_section(id) {
                // closing an already-closed menu is a no-op
                menu_open.set(false);
                set_body_class("menu-open", false);
                on_select.emit(AttrValue::from(id));
            }
        })
    };

    html! {
        <header class="header">
            <nav class="navbar">
                <a href="#home" class="nav-logo">{"Jane Doe"}</a>
                <button
                    class={classes!("hamburger", (*menu_open).then_some("active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    { for NAV_LINKS.iter().map(|&(id, label)| {
                        let is_active = props.active.as_deref() == Some(id);
                        html! {
                            <li class="nav-item">
                                <a
                                    href={format!("#{id}")}
                                    class={classes!("nav-link", is_active.then_some("active"))}
                                    onclick={link_click(id)}
                                >
                                    { label }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </header>
    }
}
