use gloo_console::log;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::effects::spawn_ripple;
use crate::components::notification::NoticeKind;

/// Simulated round-trip latency for a submission.
const SUBMIT_DELAY_MS: u32 = 2_000;

pub const ERR_MISSING_FIELDS: &str = "Please fill in all fields";
pub const ERR_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_SENT: &str = "Message sent successfully! I'll get back to you soon.";

/// Shape check for `local@domain.tld`: no whitespace, a single `@` with a
/// non-empty local part, and a dot with characters on both sides somewhere in
/// the domain.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

/// Validates a submission attempt. The empty-field check runs before the
/// email shape check, matching the order the messages surface in.
pub fn validate(name: &str, email: &str, message: &str) -> Result<(), &'static str> {
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ERR_MISSING_FIELDS);
    }
    if !is_valid_email(email) {
        return Err(ERR_INVALID_EMAIL);
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<(String, NoticeKind)>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);
    // completion timer for the in-flight submission; dropped (and therefore
    // cancelled) if the form unmounts mid-flight
    let pending = use_mut_ref(|| None::<Timeout>);

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let sending = sending.clone();
        let pending = pending.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            if let Err(reason) = validate(&name, &email, &message) {
                on_notify.emit((reason.to_string(), NoticeKind::Error));
                return;
            }

            log!("contact form accepted, simulating submission");
            sending.set(true);

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let sending = sending.clone();
            let on_notify = on_notify.clone();
            *pending.borrow_mut() = Some(Timeout::new(SUBMIT_DELAY_MS, move || {
                on_notify.emit((MSG_SENT.to_string(), NoticeKind::Success));
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                sending.set(false);
            }));
        })
    };

    let onclick = Callback::from(|e: MouseEvent| spawn_ripple(&e));

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-group">
                <input
                    type="text"
                    placeholder="Your Name"
                    value={(*name).clone()}
                    oninput={oninput_name}
                />
            </div>
            <div class="form-group">
                <input
                    type="email"
                    placeholder="Your Email"
                    value={(*email).clone()}
                    oninput={oninput_email}
                />
            </div>
            <div class="form-group">
                <textarea
                    placeholder="Your Message"
                    rows="5"
                    value={(*message).clone()}
                    oninput={oninput_message}
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled={*sending} onclick={onclick}>
                { if *sending { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plainly_shaped_addresses() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane.doe+tag@sub.example.co"));
    }

    #[test]
    fn rejects_missing_or_doubled_at_signs() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@exam ple.com"));
        assert!(!is_valid_email(" jane@example.com"));
    }

    #[test]
    fn rejects_domains_without_an_interior_dot() {
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@example."));
    }

    #[test]
    fn empty_fields_are_reported_before_email_shape() {
        assert_eq!(validate("", "", ""), Err(ERR_MISSING_FIELDS));
        assert_eq!(
            validate("Jane", "bad-email", ""),
            Err(ERR_MISSING_FIELDS)
        );
        assert_eq!(
            validate("Jane", "", "Hello"),
            Err(ERR_MISSING_FIELDS)
        );
    }

    #[test]
    fn malformed_email_aborts_a_complete_form() {
        assert_eq!(
            validate("Jane", "not-an-email", "Hello"),
            Err(ERR_INVALID_EMAIL)
        );
    }

    #[test]
    fn complete_valid_form_passes() {
        assert_eq!(validate("Jane", "jane@example.com", "Hello"), Ok(()));
    }

    #[test]
    fn whitespace_only_fields_still_count_as_filled() {
        // only true emptiness blocks the field check; the email shape check
        // then catches the blank address
        assert_eq!(validate(" ", " ", " "), Err(ERR_INVALID_EMAIL));
    }
}
