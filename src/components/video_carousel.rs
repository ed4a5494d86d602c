//! Video carousel: button and swipe navigation share one clamped slide
//! index. The horizontal transform only applies at desktop widths, checked
//! on every render.

use yew::prelude::*;

use crate::utils::viewport;

/// Upper slide bound shared by buttons and swipes. The carousel shows three
/// cards at once on desktop, so only one step of travel is ever useful.
pub const MAX_SLIDE: usize = 1;

/// Minimum horizontal travel before a touch counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

const SLIDE_STEP_PERCENT: f64 = 33.333;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    slide: usize,
}

impl CarouselState {
    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn advance(&mut self) {
        if self.slide < MAX_SLIDE {
            self.slide += 1;
        }
    }

    pub fn retreat(&mut self) {
        if self.slide > 0 {
            self.slide -= 1;
        }
    }

    /// `delta_x` is touch-start minus touch-end: positive means the finger
    /// moved left.
    pub fn swipe(&mut self, delta_x: f64) {
        if delta_x.abs() <= SWIPE_THRESHOLD {
            return;
        }
        if delta_x > 0.0 {
            self.advance();
        } else {
            self.retreat();
        }
    }

    pub fn translation_percent(&self) -> f64 {
        self.slide as f64 * SLIDE_STEP_PERCENT
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCarouselProps {
    pub videos: Vec<AttrValue>,
}

#[function_component(VideoCarousel)]
pub fn video_carousel(props: &VideoCarouselProps) -> Html {
    let state = use_state(CarouselState::default);
    let touch_start_x = use_mut_ref(|| 0.0_f64);

    let step = |forward: bool| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            if forward {
                next.advance();
            } else {
                next.retreat();
            }
            if next != *state {
                state.set(next);
            }
        })
    };

    let on_touch_start = {
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |e: TouchEvent| {
            if !viewport::is_desktop() {
                return;
            }
            if let Some(touch) = e.touches().get(0) {
                *touch_start_x.borrow_mut() = f64::from(touch.client_x());
            }
        })
    };

    let on_touch_end = {
        let state = state.clone();
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |e: TouchEvent| {
            if !viewport::is_desktop() {
                return;
            }
            if let Some(touch) = e.changed_touches().get(0) {
                let delta = *touch_start_x.borrow() - f64::from(touch.client_x());
                let mut next = *state;
                next.swipe(delta);
                if next != *state {
                    state.set(next);
                }
            }
        })
    };

    let transform = if viewport::is_desktop() {
        format!("transform: translateX(-{}%);", state.translation_percent())
    } else {
        String::new()
    };

    html! {
        <div class="relative">
            <div class="overflow-hidden">
                <div id="video-carousel"
                    style={transform}
                    ontouchstart={on_touch_start}
                    ontouchend={on_touch_end}
                    class="flex transition-transform duration-300">
                    { for props.videos.iter().map(|url| html! {
                        <div class="w-full flex-shrink-0 px-2 md:w-1/3">
                            <video controls=true preload="metadata" src={url.clone()}
                                class="aspect-video w-full rounded-xl bg-black">
                            </video>
                        </div>
                    }) }
                </div>
            </div>
            <button id="prev-video" onclick={step(false)}
                class="absolute -left-4 top-1/2 flex h-10 w-10 -translate-y-1/2 items-center justify-center rounded-full bg-white shadow dark:bg-gray-800"
                aria-label="Попереднє відео">
                {"‹"}
            </button>
            <button id="next-video" onclick={step(true)}
                class="absolute -right-4 top-1/2 flex h-10 w-10 -translate-y-1/2 items-center justify-center rounded-full bg-white shadow dark:bg-gray-800"
                aria-label="Наступне відео">
                {"›"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_clamp_between_zero_and_max() {
        let mut state = CarouselState::default();
        state.retreat();
        assert_eq!(state.slide(), 0);
        state.advance();
        assert_eq!(state.slide(), 1);
        state.advance();
        assert_eq!(state.slide(), MAX_SLIDE);
    }

    #[test]
    fn swipe_ignores_travel_at_or_below_threshold() {
        let mut state = CarouselState::default();
        state.swipe(SWIPE_THRESHOLD);
        state.swipe(-SWIPE_THRESHOLD);
        state.swipe(10.0);
        assert_eq!(state.slide(), 0);
    }

    #[test]
    fn swipe_left_advances_and_swipe_right_retreats() {
        let mut state = CarouselState::default();
        state.swipe(80.0);
        assert_eq!(state.slide(), 1);
        state.swipe(-80.0);
        assert_eq!(state.slide(), 0);
    }

    #[test]
    fn swipe_shares_the_button_bound() {
        let mut state = CarouselState::default();
        for _ in 0..5 {
            state.swipe(120.0);
        }
        assert_eq!(state.slide(), MAX_SLIDE);
        for _ in 0..5 {
            state.swipe(-120.0);
        }
        assert_eq!(state.slide(), 0);
    }

    #[test]
    fn translation_steps_a_third_per_slide() {
        let mut state = CarouselState::default();
        assert_eq!(state.translation_percent(), 0.0);
        state.advance();
        assert_eq!(state.translation_percent(), 33.333);
    }
}
