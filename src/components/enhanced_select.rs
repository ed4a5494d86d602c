//! Styled dropdown kept in sync with a hidden native `<select>` so the form
//! still submits through standard controls. The page owns a single "which
//! overlay is open" slot, so at most one list is open at a time.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlSelectElement, MutationObserver, MutationObserverInit};
use yew::prelude::*;

const OPTION_COLOR_LIGHT: &str = "#fcd34d";
const OPTION_COLOR_DARK: &str = "#fde68a";
const PLACEHOLDER_COLOR_LIGHT: &str = "#9ca3af";
const PLACEHOLDER_COLOR_DARK: &str = "#6b7280";

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: AttrValue,
    pub label: AttrValue,
    pub disabled: bool,
    pub hidden: bool,
}

impl SelectOption {
    pub fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            hidden: false,
        }
    }

    /// A disabled + hidden option is the native control's empty state; it
    /// never appears in the overlay list.
    pub fn placeholder(label: &'static str) -> Self {
        Self {
            value: "".into(),
            label: label.into(),
            disabled: true,
            hidden: true,
        }
    }
}

/// Options mirrored into the overlay, with pure placeholders skipped.
pub fn overlay_options(options: &[SelectOption]) -> Vec<SelectOption> {
    options
        .iter()
        .filter(|option| !(option.disabled && option.hidden))
        .cloned()
        .collect()
}

/// Whether the current value should render with placeholder styling.
pub fn is_placeholder_choice(options: &[SelectOption], value: &str) -> bool {
    options
        .iter()
        .find(|option| &*option.value == value)
        .map(|option| option.disabled || option.value.is_empty())
        .unwrap_or(true)
}

/// Next owner of the page-wide open slot after one widget toggles. Opening
/// claims the slot (closing whichever widget held it); a close request only
/// releases the slot if that widget still owns it, so a widget closing late
/// cannot stomp another's freshly opened overlay.
pub fn slot_after_toggle(
    current: Option<&'static str>,
    id: &'static str,
    open: bool,
) -> Option<&'static str> {
    if open {
        Some(id)
    } else if current == Some(id) {
        None
    } else {
        current
    }
}

pub fn display_label(options: &[SelectOption], value: &str) -> AttrValue {
    options
        .iter()
        .find(|option| &*option.value == value)
        .map(|option| option.label.clone())
        .unwrap_or(AttrValue::Static(""))
}

fn is_dark_mode() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains("dark"))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct EnhancedSelectProps {
    pub name: AttrValue,
    pub options: Vec<SelectOption>,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    pub is_open: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(EnhancedSelect)]
pub fn enhanced_select(props: &EnhancedSelectProps) -> Html {
    let container_ref = use_node_ref();
    let is_dark = use_state(is_dark_mode);

    // React to the light/dark class flipping on the document root without
    // remounting the widget.
    {
        let is_dark = is_dark.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let callback =
                        Closure::<dyn FnMut()>::new(move || is_dark.set(is_dark_mode()));
                    if let Ok(observer) =
                        MutationObserver::new(callback.as_ref().unchecked_ref())
                    {
                        let mut init = MutationObserverInit::new();
                        init.attributes(true);
                        init.attribute_filter(&js_sys::Array::of1(&JsValue::from_str(
                            "class",
                        )));
                        let _ = observer.observe_with_options(&root, &init);
                    }
                    callback.forget();
                }
                || ()
            },
            (),
        );
    }

    // While open: close on Escape and on clicks that land outside every
    // enhanced-select container. Clicks inside one are that widget's own
    // business.
    {
        let on_toggle = props.on_toggle.clone();
        use_effect_with_deps(
            move |open| {
                let destructor: Box<dyn FnOnce()> = if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let click = Closure::wrap(Box::new({
                            let on_toggle = on_toggle.clone();
                            move |event: web_sys::MouseEvent| {
                                let in_container = event
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                                    .and_then(|el| {
                                        el.closest("[data-enhanced-select]").ok().flatten()
                                    })
                                    .is_some();
                                if !in_container {
                                    on_toggle.emit(false);
                                }
                            }
                        })
                            as Box<dyn FnMut(web_sys::MouseEvent)>);
                        let key = Closure::wrap(Box::new({
                            let on_toggle = on_toggle.clone();
                            move |event: web_sys::KeyboardEvent| {
                                if event.key() == "Escape" {
                                    on_toggle.emit(false);
                                }
                            }
                        })
                            as Box<dyn FnMut(web_sys::KeyboardEvent)>);
                        let _ = document.add_event_listener_with_callback(
                            "click",
                            click.as_ref().unchecked_ref(),
                        );
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            key.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            if let Some(document) =
                                web_sys::window().and_then(|w| w.document())
                            {
                                let _ = document.remove_event_listener_with_callback(
                                    "click",
                                    click.as_ref().unchecked_ref(),
                                );
                                let _ = document.remove_event_listener_with_callback(
                                    "keydown",
                                    key.as_ref().unchecked_ref(),
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
            props.is_open,
        );
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let open = props.is_open;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(!open);
        })
    };

    let native_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    let placeholder = is_placeholder_choice(&props.options, &props.value);
    let label = display_label(&props.options, &props.value);
    let option_color = if *is_dark {
        OPTION_COLOR_DARK
    } else {
        OPTION_COLOR_LIGHT
    };
    let placeholder_color = if *is_dark {
        PLACEHOLDER_COLOR_DARK
    } else {
        PLACEHOLDER_COLOR_LIGHT
    };
    let value_color = if placeholder {
        placeholder_color
    } else {
        option_color
    };

    html! {
        <div ref={container_ref} data-enhanced-select="" class="relative">
            <select
                name={props.name.clone()}
                class="hidden"
                style={format!("color: {value_color};")}
                onchange={native_change}>
                { for props.options.iter().map(|option| html! {
                    <option
                        value={option.value.clone()}
                        selected={option.value == props.value}
                        disabled={option.disabled}
                        hidden={option.hidden}>
                        { option.label.clone() }
                    </option>
                }) }
            </select>
            <button type="button" data-select-trigger=""
                onclick={toggle}
                aria-haspopup="listbox"
                aria-expanded={if props.is_open { "true" } else { "false" }}
                class="flex w-full h-11 items-center justify-between rounded-lg bg-gray-100 dark:bg-gray-800 border border-transparent px-4 text-left focus:outline-none focus:ring-2 focus:ring-primary">
                <span data-select-value=""
                    class={classes!("block", "truncate", (!placeholder).then_some("font-medium"))}
                    style={format!("color: {value_color};")}>
                    { label }
                </span>
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                    class={classes!(
                        "ml-2", "h-5", "w-5", "flex-shrink-0",
                        "text-[#fcd34d]", "dark:text-[#fde68a]",
                        "transition-transform", "duration-200",
                        props.is_open.then_some("rotate-180"),
                    )}>
                    <path stroke-linecap="round" stroke-linejoin="round" d="M6 9l6 6 6-6" />
                </svg>
            </button>
            <ul data-select-options="" role="listbox"
                class={classes!(
                    "absolute", "left-0", "right-0", "top-full", "z-20", "mt-2",
                    "max-h-56", "overflow-auto", "rounded-xl",
                    "border", "border-gray-200", "dark:border-gray-700",
                    "bg-gray-100", "dark:bg-gray-800", "shadow-2xl",
                    (!props.is_open).then_some("hidden"),
                )}>
                { for overlay_options(&props.options).into_iter().map(|option| {
                    let on_click = {
                        let on_change = props.on_change.clone();
                        let on_toggle = props.on_toggle.clone();
                        let value = option.value.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_change.emit(value.to_string());
                            on_toggle.emit(false);
                        })
                    };
                    let on_keydown = {
                        let on_change = props.on_change.clone();
                        let on_toggle = props.on_toggle.clone();
                        let value = option.value.clone();
                        Callback::from(move |e: KeyboardEvent| {
                            if e.key() == "Enter" || e.key() == " " {
                                e.prevent_default();
                                on_change.emit(value.to_string());
                                on_toggle.emit(false);
                            }
                        })
                    };
                    html! {
                        <li role="option" tabindex="0"
                            data-option-value={option.value.clone()}
                            aria-selected={if option.value == props.value { "true" } else { "false" }}
                            onclick={on_click}
                            onkeydown={on_keydown}
                            class={classes!(
                                "px-4", "py-2", "cursor-pointer",
                                "text-[#fcd34d]", "dark:text-[#fde68a]",
                                "hover:bg-primary/10", "focus:bg-primary/10",
                                "focus:outline-none", "transition-colors", "duration-150",
                                (option.value == props.value).then_some("bg-primary/10"),
                            )}>
                            { option.label.clone() }
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::placeholder("Оберіть статус"),
            SelectOption::new("civilian", "Цивільний"),
            SelectOption::new("military", "Військовослужбовець"),
        ]
    }

    #[test]
    fn overlay_skips_pure_placeholders() {
        let overlay = overlay_options(&options());
        assert_eq!(overlay.len(), 2);
        assert!(overlay.iter().all(|o| !o.value.is_empty()));
    }

    #[test]
    fn overlay_keeps_disabled_but_visible_options() {
        let mut opts = options();
        opts.push(SelectOption {
            value: "closed".into(),
            label: "Набір закрито".into(),
            disabled: true,
            hidden: false,
        });
        let overlay = overlay_options(&opts);
        assert!(overlay.iter().any(|o| &*o.value == "closed"));
    }

    #[test]
    fn empty_or_unknown_value_is_placeholder() {
        let opts = options();
        assert!(is_placeholder_choice(&opts, ""));
        assert!(is_placeholder_choice(&opts, "nonexistent"));
        assert!(!is_placeholder_choice(&opts, "civilian"));
    }

    #[test]
    fn opening_takes_the_slot_from_any_other_widget() {
        assert_eq!(slot_after_toggle(None, "status", true), Some("status"));
        assert_eq!(slot_after_toggle(Some("status"), "rank", true), Some("rank"));
    }

    #[test]
    fn only_the_owner_releases_the_slot() {
        assert_eq!(slot_after_toggle(Some("status"), "status", false), None);
        // A stale close from the widget that just lost the slot leaves the
        // new owner open.
        assert_eq!(
            slot_after_toggle(Some("rank"), "status", false),
            Some("rank")
        );
        assert_eq!(slot_after_toggle(None, "status", false), None);
    }

    #[test]
    fn display_label_follows_value() {
        let opts = options();
        assert_eq!(&*display_label(&opts, ""), "Оберіть статус");
        assert_eq!(&*display_label(&opts, "military"), "Військовослужбовець");
        assert_eq!(&*display_label(&opts, "nonexistent"), "");
    }
}
