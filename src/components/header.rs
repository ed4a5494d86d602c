//! Fixed page header: publishes the `--header-offset` custom property,
//! owns the mobile menu, and routes in-page anchor clicks through the
//! smooth scroller.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::viewport;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Про нас", "about"),
    ("Галерея", "gallery"),
    ("Відео", "videos"),
    ("Питання", "faq"),
    ("Контакти", "contacts"),
];

fn publish_offset(header: &NodeRef) {
    let height = header
        .cast::<web_sys::Element>()
        .map(|el| el.get_bounding_client_rect().height())
        .unwrap_or(viewport::FALLBACK_HEADER_HEIGHT);
    let offset = viewport::header_offset(height, viewport::is_desktop());

    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
            let _ = root
                .style()
                .set_property("--header-offset", &format!("{offset}px"));
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let header_ref = use_node_ref();
    let menu_ref = use_node_ref();
    let menu_button_ref = use_node_ref();
    let menu_open = use_state(|| false);

    // Keep --header-offset in sync with the rendered header size. The
    // listeners live as long as the page does.
    {
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |_| {
                publish_offset(&header_ref);

                let callback = Closure::<dyn Fn()>::new({
                    let header_ref = header_ref.clone();
                    move || publish_offset(&header_ref)
                });
                if let Ok(observer) =
                    web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref())
                {
                    if let Some(header) = header_ref.cast::<web_sys::Element>() {
                        observer.observe(&header);
                    }
                    std::mem::forget(observer);
                }
                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        callback.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        "orientationchange",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                callback.forget();
                || ()
            },
            (),
        );
    }

    // Close the mobile menu on any click outside it and its toggle button.
    {
        let deps = *menu_open;
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let menu_button_ref = menu_button_ref.clone();
        use_effect_with_deps(
            move |open| {
                let destructor: Box<dyn FnOnce()> = if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::wrap(Box::new({
                            let menu_open = menu_open.clone();
                            move |event: web_sys::MouseEvent| {
                                let target = event
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                                let inside = |node_ref: &NodeRef| {
                                    node_ref
                                        .cast::<web_sys::Node>()
                                        .map(|node| node.contains(target.as_ref()))
                                        .unwrap_or(false)
                                };
                                if !inside(&menu_ref) && !inside(&menu_button_ref) {
                                    menu_open.set(false);
                                }
                            }
                        })
                            as Box<dyn FnMut(web_sys::MouseEvent)>);
                        let _ = document.add_event_listener_with_callback(
                            "click",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                                let _ = document.remove_event_listener_with_callback(
                                    "click",
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
            deps,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |fragment: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            viewport::scroll_to_fragment(fragment);
            if *menu_open {
                menu_open.set(false);
            }
        })
    };

    html! {
        <header ref={header_ref}
            class="fixed top-0 left-0 right-0 z-40 bg-white/90 dark:bg-gray-900/90 backdrop-blur border-b border-gray-200 dark:border-gray-800">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-4 py-4">
                <a href="#" class="text-xl font-bold text-gray-900 dark:text-white">
                    {"Центр підготовки"}
                </a>
                <nav class="hidden md:flex items-center gap-6">
                    { for NAV_LINKS.iter().map(|&(label, fragment)| html! {
                        <a href={format!("#{fragment}")}
                            onclick={nav_link(fragment)}
                            class="text-gray-700 dark:text-gray-300 hover:text-primary transition-colors">
                            { label }
                        </a>
                    }) }
                </nav>
                <button id="mobile-menu-button" ref={menu_button_ref}
                    onclick={toggle_menu}
                    class="md:hidden p-2 text-gray-700 dark:text-gray-300"
                    aria-label="Меню">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="h-6 w-6">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M4 6h16M4 12h16M4 18h16" />
                    </svg>
                </button>
            </div>
            <div id="mobile-menu" ref={menu_ref}
                class={classes!(
                    "md:hidden", "border-t", "border-gray-200", "dark:border-gray-800",
                    "bg-white", "dark:bg-gray-900", "px-4", "pb-4",
                    (!*menu_open).then_some("hidden"),
                )}>
                { for NAV_LINKS.iter().map(|&(label, fragment)| html! {
                    <a href={format!("#{fragment}")}
                        onclick={nav_link(fragment)}
                        class="block py-2 text-gray-700 dark:text-gray-300">
                        { label }
                    </a>
                }) }
            </div>
        </header>
    }
}
