//! Photo gallery with a desktop-only lightbox. The image list is fixed at
//! mount; navigation state lives in [`GalleryNav`].

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::modal::clicked_backdrop;
use crate::utils::viewport;

/// Bounded cursor over the gallery's image list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryNav {
    len: usize,
    index: usize,
}

impl GalleryNav {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves to `index` if it is in bounds; out-of-bounds requests leave the
    /// cursor untouched.
    pub fn show(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.index -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }
}

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct PhotoGalleryProps {
    pub images: Vec<AttrValue>,
}

#[function_component(PhotoGallery)]
pub fn photo_gallery(props: &PhotoGalleryProps) -> Html {
    let nav = use_state(|| GalleryNav::new(props.images.len()));
    let lightbox_open = use_state(|| false);
    let overlay_ref = use_node_ref();

    // Keyboard navigation while the lightbox is open.
    {
        let deps = (*lightbox_open, *nav);
        let nav = nav.clone();
        let lightbox_open = lightbox_open.clone();
        use_effect_with_deps(
            move |(open, current): &(bool, GalleryNav)| {
                let destructor: Box<dyn FnOnce()> = if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let current = *current;
                        let callback = Closure::wrap(Box::new({
                            move |event: web_sys::KeyboardEvent| match event.key().as_str() {
                                "Escape" => {
                                    lightbox_open.set(false);
                                    set_body_scroll_locked(false);
                                }
                                "ArrowLeft" => {
                                    let mut next = current;
                                    next.prev();
                                    if next != current {
                                        nav.set(next);
                                    }
                                }
                                "ArrowRight" => {
                                    let mut next = current;
                                    next.next();
                                    if next != current {
                                        nav.set(next);
                                    }
                                }
                                _ => {}
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
            deps,
        );
    }

    let open_at = |index: usize| {
        let nav = nav.clone();
        let lightbox_open = lightbox_open.clone();
        Callback::from(move |_: MouseEvent| {
            // Thumbnails only open the lightbox on desktop widths.
            if !viewport::is_desktop() {
                return;
            }
            let mut next = *nav;
            if next.show(index) {
                nav.set(next);
                lightbox_open.set(true);
                set_body_scroll_locked(true);
            }
        })
    };

    let close = {
        let lightbox_open = lightbox_open.clone();
        Callback::from(move |_: MouseEvent| {
            lightbox_open.set(false);
            set_body_scroll_locked(false);
        })
    };

    // Clicks are compared against the overlay node itself; delegated
    // dispatch makes `current_target` useless here.
    let backdrop_close = {
        let lightbox_open = lightbox_open.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if clicked_backdrop(target, overlay_ref.get()) {
                lightbox_open.set(false);
                set_body_scroll_locked(false);
            }
        })
    };

    let step = |forward: bool| {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *nav;
            if forward {
                next.next();
            } else {
                next.prev();
            }
            nav.set(next);
        })
    };

    let current_image = props
        .images
        .get(nav.index())
        .cloned()
        .unwrap_or(AttrValue::Static(""));

    html! {
        <>
            <div class="grid grid-cols-2 gap-4 md:grid-cols-3">
                { for props.images.iter().enumerate().map(|(i, url)| html! {
                    <div class="group cursor-default md:cursor-pointer" onclick={open_at(i)}>
                        <div class="bg-cover bg-center aspect-square rounded-xl transition-transform duration-200 group-hover:scale-[1.02]"
                            style={format!("background-image: url('{url}')")}>
                        </div>
                    </div>
                }) }
            </div>

            if *lightbox_open {
                <div id="image-modal" ref={overlay_ref} onclick={backdrop_close}
                    class="fixed inset-0 z-50 flex items-center justify-center bg-black/80">
                    <img id="modal-image" src={current_image} alt=""
                        class="max-h-[85vh] max-w-[90vw] rounded-lg" />
                    <button id="close-modal" onclick={close}
                        class="absolute right-4 top-4 flex h-10 w-10 items-center justify-center rounded-full bg-white/10 text-white"
                        aria-label="Закрити">
                        {"✕"}
                    </button>
                    if nav.has_prev() {
                        <button id="prev-image" onclick={step(false)}
                            class="absolute left-4 flex h-12 w-12 items-center justify-center rounded-full bg-white/10 text-white"
                            aria-label="Попереднє фото">
                            {"‹"}
                        </button>
                    }
                    if nav.has_next() {
                        <button id="next-image" onclick={step(true)}
                            class="absolute right-4 flex h-12 w-12 items-center justify-center rounded-full bg-white/10 text-white"
                            aria-label="Наступне фото">
                            {"›"}
                        </button>
                    }
                </div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_rejects_out_of_bounds_indices() {
        let mut nav = GalleryNav::new(3);
        assert!(!nav.show(3));
        assert_eq!(nav.index(), 0);
        assert!(nav.show(2));
        assert_eq!(nav.index(), 2);
    }

    #[test]
    fn show_is_idempotent() {
        let mut nav = GalleryNav::new(3);
        assert!(nav.show(1));
        assert!(nav.show(1));
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn prev_button_hidden_exactly_at_first_image() {
        let mut nav = GalleryNav::new(3);
        assert!(!nav.has_prev());
        nav.show(1);
        assert!(nav.has_prev());
    }

    #[test]
    fn next_button_hidden_exactly_at_last_image() {
        let mut nav = GalleryNav::new(3);
        assert!(nav.has_next());
        nav.show(2);
        assert!(!nav.has_next());
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        let mut nav = GalleryNav::new(2);
        nav.prev();
        assert_eq!(nav.index(), 0);
        nav.next();
        nav.next();
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn empty_gallery_never_navigates() {
        let mut nav = GalleryNav::new(0);
        assert!(!nav.show(0));
        assert!(!nav.has_prev());
        assert!(!nav.has_next());
    }
}
