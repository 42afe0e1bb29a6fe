use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }

    fn icon_class(self) -> &'static str {
        match self {
            Severity::Info => "fa-info-circle",
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
        }
    }
}

/// A single toast. The id distinguishes consecutive notices so an old
/// notice's removal can never clear a newer one.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
}

/// Entry and exit are driven by explicit phases rather than paint timing:
/// a notice renders off-screen first and slides in once the entry delay
/// elapses, so the transition is actually observable.
#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Pending,
    Visible,
    Dismissing,
}

#[derive(Default)]
struct NoticeTimers {
    show: Option<Timeout>,
    auto_hide: Option<Timeout>,
    removal: Option<Timeout>,
}

impl NoticeTimers {
    fn clear(&mut self) {
        // Dropping a pending Timeout cancels it.
        self.show.take();
        self.auto_hide.take();
        self.removal.take();
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    pub notice: Option<Notice>,
    /// Fired once the exit transition of the given notice id has run.
    pub on_closed: Callback<u32>,
}

#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    let phase = use_state_eq(|| Phase::Pending);
    let timers = use_mut_ref(NoticeTimers::default);

    // Restart the lifecycle whenever the live notice changes. The cleanup
    // drops the previous notice's timers, which both cancels its auto-hide
    // and makes eviction immediate.
    {
        let phase = phase.clone();
        let timers = timers.clone();
        let on_closed = props.on_closed.clone();
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                if let Some(notice) = notice {
                    phase.set(Phase::Pending);
                    let show = {
                        let phase = phase.clone();
                        Timeout::new(config::NOTIFICATION_ENTER_DELAY_MS, move || {
                            phase.set(Phase::Visible);
                        })
                    };
                    let auto_hide = {
                        let phase = phase.clone();
                        let timers = timers.clone();
                        let on_closed = on_closed.clone();
                        let id = notice.id;
                        Timeout::new(config::NOTIFICATION_AUTO_HIDE_MS, move || {
                            phase.set(Phase::Dismissing);
                            let on_closed = on_closed.clone();
                            let removal = Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
                                on_closed.emit(id);
                            });
                            timers.borrow_mut().removal = Some(removal);
                        })
                    };
                    let mut slots = timers.borrow_mut();
                    slots.show = Some(show);
                    slots.auto_hide = Some(auto_hide);
                }

                move || timers.borrow_mut().clear()
            },
            props.notice.clone(),
        );
    }

    let dismiss = props.notice.as_ref().map(|notice| {
        let phase = phase.clone();
        let timers = timers.clone();
        let on_closed = props.on_closed.clone();
        let id = notice.id;
        Callback::from(move |_: MouseEvent| {
            let mut slots = timers.borrow_mut();
            // Manual close must not leave the auto-hide timer behind.
            slots.show.take();
            slots.auto_hide.take();
            phase.set(Phase::Dismissing);
            let on_closed = on_closed.clone();
            slots.removal = Some(Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
                on_closed.emit(id);
            }));
        })
    });

    let toast = match (&props.notice, dismiss) {
        (Some(notice), Some(dismiss)) => {
            let shown = *phase == Phase::Visible;
            html! {
                <div class={classes!(
                    "notification",
                    notice.severity.css_class(),
                    shown.then(|| "show"),
                )}>
                    <div class="notification-content">
                        <i class={classes!("fas", notice.severity.icon_class())}></i>
                        <span class="notification-message">{ notice.message.clone() }</span>
                        <button class="notification-close" aria-label="Cerrar" onclick={dismiss}>
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                </div>
            }
        }
        _ => html! {},
    };

    html! {
        <>
            <style>{ NOTIFICATION_STYLES }</style>
            { toast }
        </>
    }
}

const NOTIFICATION_STYLES: &str = r#"
.notification {
    position: fixed;
    top: 100px;
    right: 24px;
    max-width: 400px;
    padding: 16px 20px;
    border-radius: 12px;
    box-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.1);
    z-index: 10000;
    transform: translateX(100%);
    transition: transform 0.3s ease-out;
    backdrop-filter: blur(20px);
}

.notification.show {
    transform: translateX(0);
}

.notification-success {
    background: rgba(16, 185, 129, 0.95);
    color: white;
    border: 1px solid rgba(16, 185, 129, 0.3);
}

.notification-error {
    background: rgba(239, 68, 68, 0.95);
    color: white;
    border: 1px solid rgba(239, 68, 68, 0.3);
}

.notification-info {
    background: rgba(59, 130, 246, 0.95);
    color: white;
    border: 1px solid rgba(59, 130, 246, 0.3);
}

.notification-content {
    display: flex;
    align-items: center;
    gap: 12px;
}

.notification-message {
    white-space: pre-line;
}

.notification-close {
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
    padding: 4px;
    border-radius: 4px;
    transition: background-color 0.2s;
    margin-left: auto;
}

.notification-close:hover {
    background: rgba(255, 255, 255, 0.2);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_presentation_classes() {
        assert_eq!(Severity::Info.css_class(), "notification-info");
        assert_eq!(Severity::Success.css_class(), "notification-success");
        assert_eq!(Severity::Error.css_class(), "notification-error");
    }

    #[test]
    fn severity_maps_to_icons() {
        assert_eq!(Severity::Info.icon_class(), "fa-info-circle");
        assert_eq!(Severity::Success.icon_class(), "fa-check-circle");
        assert_eq!(Severity::Error.icon_class(), "fa-exclamation-circle");
    }

    #[test]
    fn notices_with_different_ids_are_distinct() {
        let first = Notice { id: 1, message: "hola".into(), severity: Severity::Info };
        let second = Notice { id: 2, message: "hola".into(), severity: Severity::Info };
        assert_ne!(first, second);
    }
}
