use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Visual treatment of a notice. Timing is identical for both kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class_name(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            NoticeKind::Success => "#10b981",
            NoticeKind::Error => "#ef4444",
        }
    }
}

/// One transient toast. A new notice replaces any live one wholesale; the id
/// keys the component so replacement remounts it and drops pending timers.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub kind: NoticeKind,
}

// Phases: 0 off-screen entry, 1 visible hold, 2 slide-out, then dismissal.
const ENTER_DELAY_MS: u32 = 100;
const VISIBLE_MS: u32 = 5_000;
const LEAVE_MS: u32 = 300;

fn phase_delay(phase: u32) -> u32 {
    match phase {
        0 => ENTER_DELAY_MS,
        1 => VISIBLE_MS,
        _ => LEAVE_MS,
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Notice,
    pub on_dismiss: Callback<u32>,
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationProps) -> Html {
    let phase = use_state(|| 0u32);
    let timer = use_mut_ref(|| None::<Timeout>);

    {
        let phase_setter = phase.setter();
        let on_dismiss = props.on_dismiss.clone();
        let id = props.notice.id;
        let timer = timer.clone();
        use_effect_with_deps(
            move |current: &u32| {
                let current = *current;
                *timer.borrow_mut() = Some(Timeout::new(phase_delay(current), move || {
                    if current >= 2 {
                        on_dismiss.emit(id);
                    } else {
                        phase_setter.set(current + 1);
                    }
                }));
                // dropping the handle on unmount cancels the pending phase
                move || {
                    timer.borrow_mut().take();
                }
            },
            *phase,
        );
    }

    let transform = if *phase == 1 {
        "translateX(0)"
    } else {
        "translateX(400px)"
    };
    let style = format!(
        "position: fixed; top: 20px; right: 20px; padding: 15px 20px; \
         border-radius: 8px; color: white; font-weight: 500; z-index: 10000; \
         transform: {}; transition: transform 0.3s ease; background: {};",
        transform,
        props.notice.kind.background()
    );

    html! {
        <div class={classes!("notification", props.notice.kind.class_name())} style={style}>
            { &props.notice.message }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_delays_match_the_toast_lifecycle() {
        assert_eq!(phase_delay(0), 100);
        assert_eq!(phase_delay(1), 5_000);
        assert_eq!(phase_delay(2), 300);
    }

    #[test]
    fn total_lifetime_is_roughly_five_and_a_half_seconds() {
        let total: u32 = (0..3).map(phase_delay).sum();
        assert_eq!(total, 5_400);
    }

    #[test]
    fn severity_maps_to_distinct_treatments() {
        assert_eq!(NoticeKind::Success.background(), "#10b981");
        assert_eq!(NoticeKind::Error.background(), "#ef4444");
        assert_ne!(
            NoticeKind::Success.class_name(),
            NoticeKind::Error.class_name()
        );
    }
}
