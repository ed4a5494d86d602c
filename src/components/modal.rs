//! Result dialog with a two-phase scale transition: mount collapsed, expand
//! a tick later; collapse on close and unmount after the transition ends.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const ENTER_DELAY_MS: u32 = 10;
pub const CLOSE_DELAY_MS: u32 = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Hidden,
    Collapsed,
    Open,
}

impl ModalPhase {
    pub fn backdrop_display(self) -> &'static str {
        match self {
            ModalPhase::Hidden => "hidden",
            ModalPhase::Collapsed | ModalPhase::Open => "flex",
        }
    }

    pub fn content_scale(self) -> &'static str {
        match self {
            ModalPhase::Open => "scale-100",
            ModalPhase::Hidden | ModalPhase::Collapsed => "scale-95",
        }
    }
}

/// Immediate phase for a toggle of the open flag, plus the phase the
/// deferred timer should apply once the transition delay elapses.
pub fn phase_transition(open: bool, phase: ModalPhase) -> (ModalPhase, Option<ModalPhase>) {
    if open {
        (ModalPhase::Collapsed, Some(ModalPhase::Open))
    } else if phase != ModalPhase::Hidden {
        (ModalPhase::Collapsed, Some(ModalPhase::Hidden))
    } else {
        (ModalPhase::Hidden, None)
    }
}

/// Listeners are delegated to the app root, so `current_target` never
/// identifies the backdrop; the click target has to be compared against
/// the backdrop node itself.
pub fn clicked_backdrop<N: PartialEq>(target: Option<N>, backdrop: Option<N>) -> bool {
    match (target, backdrop) {
        (Some(target), Some(backdrop)) => target == backdrop,
        _ => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let phase = use_state(ModalPhase::default);
    let backdrop_ref = use_node_ref();

    // Drive the phase from the owner's open flag. The destructor cancels
    // the pending timer, so a re-toggle before the delay elapses cannot be
    // overtaken by the superseded transition.
    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |open| {
                let (now, deferred) = phase_transition(*open, *phase);
                if now != *phase {
                    phase.set(now);
                }
                let pending = deferred.map(|next| {
                    let phase = phase.clone();
                    let delay = match next {
                        ModalPhase::Open => ENTER_DELAY_MS,
                        _ => CLOSE_DELAY_MS,
                    };
                    Timeout::new(delay, move || phase.set(next))
                });
                move || drop(pending)
            },
            props.open,
        );
    }

    // Escape closes the dialog while it is open; a no-op otherwise.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let destructor: Box<dyn FnOnce()> = if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::wrap(Box::new({
                            let on_close = on_close.clone();
                            move |event: web_sys::KeyboardEvent| {
                                if event.key() == "Escape" {
                                    on_close.emit(());
                                }
                            }
                        })
                            as Box<dyn FnMut(web_sys::KeyboardEvent)>);
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                                let _ = document.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    } else {
                        Box::new(|| ())
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            props.open,
        );
    }

    // Only clicks landing on the backdrop itself dismiss, not ones inside
    // the content.
    let backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if clicked_backdrop(target, backdrop_ref.get()) {
                on_close.emit(());
            }
        })
    };

    html! {
        <div id={props.id.clone()} ref={backdrop_ref}
            onclick={backdrop_click}
            class={classes!(
                "fixed", "inset-0", "z-50", "items-center", "justify-center",
                "bg-black/60", "px-4",
                phase.backdrop_display(),
            )}>
            <div id={format!("{}Content", props.id)}
                class={classes!(
                    "w-full", "max-w-md", "rounded-2xl", "bg-white", "dark:bg-gray-800",
                    "p-8", "text-center", "shadow-2xl",
                    "transform", "transition-transform", "duration-200",
                    phase.content_scale(),
                )}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_the_initial_phase() {
        assert_eq!(ModalPhase::default(), ModalPhase::Hidden);
    }

    #[test]
    fn only_hidden_phase_hides_the_backdrop() {
        assert_eq!(ModalPhase::Hidden.backdrop_display(), "hidden");
        assert_eq!(ModalPhase::Collapsed.backdrop_display(), "flex");
        assert_eq!(ModalPhase::Open.backdrop_display(), "flex");
    }

    #[test]
    fn only_open_phase_expands_the_content() {
        assert_eq!(ModalPhase::Hidden.content_scale(), "scale-95");
        assert_eq!(ModalPhase::Collapsed.content_scale(), "scale-95");
        assert_eq!(ModalPhase::Open.content_scale(), "scale-100");
    }

    #[test]
    fn opening_defers_the_expanded_phase() {
        assert_eq!(
            phase_transition(true, ModalPhase::Hidden),
            (ModalPhase::Collapsed, Some(ModalPhase::Open))
        );
    }

    #[test]
    fn closing_collapses_now_and_hides_later() {
        assert_eq!(
            phase_transition(false, ModalPhase::Open),
            (ModalPhase::Collapsed, Some(ModalPhase::Hidden))
        );
    }

    #[test]
    fn closing_an_already_hidden_dialog_schedules_nothing() {
        assert_eq!(phase_transition(false, ModalPhase::Hidden), (ModalPhase::Hidden, None));
    }

    #[test]
    fn reopening_supersedes_the_pending_hide() {
        // Closing leaves a deferred Hidden behind...
        let (now, deferred) = phase_transition(false, ModalPhase::Open);
        assert_eq!(deferred, Some(ModalPhase::Hidden));
        // ...reopening replaces it; the fresh transition never hides, so
        // once the stale timer is cancelled no Hidden can land while open.
        let (now, deferred) = phase_transition(true, now);
        assert_eq!(now, ModalPhase::Collapsed);
        assert_eq!(deferred, Some(ModalPhase::Open));
    }

    #[test]
    fn backdrop_click_requires_the_backdrop_itself() {
        assert!(clicked_backdrop(Some(1), Some(1)));
        // A click inside the content reaches the handler with a different
        // target and must not dismiss.
        assert!(!clicked_backdrop(Some(1), Some(2)));
        assert!(!clicked_backdrop(None::<i32>, Some(2)));
        assert!(!clicked_backdrop(Some(1), None));
    }
}
