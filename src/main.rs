use log::{info, Level};
use yew::prelude::*;

mod scroll;
mod components {
    pub mod contact_form;
    pub mod effects;
    pub mod nav;
    pub mod notification;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

// Behavior-driven rules the page relies on: ripple keyframes, the reveal
// transitions toggled by the scroll tracker, the active-link accent, the
// mobile scroll lock and the dark-theme filter. Visual theming beyond these
// lives with the host page.
const GLOBAL_CSS: &str = r#"
    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    .header {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        background: rgba(255, 255, 255, 0.95);
        z-index: 1000;
    }

    .service-card {
        opacity: 0;
        transform: translateY(30px);
        transition: all 0.6s ease;
    }

    .service-card.animate {
        opacity: 1;
        transform: translateY(0);
    }

    .stat {
        opacity: 0;
        transform: scale(0.8);
        transition: all 0.6s ease;
    }

    .stat.animate {
        opacity: 1;
        transform: scale(1);
    }

    .skill-tag {
        opacity: 0;
        transform: translateX(-20px);
        transition: all 0.4s ease;
    }

    .skill-tag.animate {
        opacity: 1;
        transform: translateX(0);
    }

    .nav-link.active {
        color: #6366f1;
    }

    body.menu-open {
        overflow: hidden;
    }

    .theme-toggle {
        position: fixed;
        bottom: 20px;
        right: 20px;
        width: 50px;
        height: 50px;
        border-radius: 50%;
        border: none;
        background: #6366f1;
        color: white;
        font-size: 20px;
        cursor: pointer;
        z-index: 1000;
        transition: all 0.3s ease;
        box-shadow: 0 4px 20px rgba(99, 102, 241, 0.3);
    }

    .dark-theme {
        filter: invert(1) hue-rotate(180deg);
    }

    .dark-theme img,
    .dark-theme video,
    .dark-theme .hero-placeholder {
        filter: invert(1) hue-rotate(180deg);
    }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>{ GLOBAL_CSS }</style>
            <Home />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
