//! FAQ accordion with at most one answer open at a time.

use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

impl FaqEntry {
    pub fn new(question: &'static str, answer: &'static str) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Clicking the open entry closes it; clicking any other entry replaces it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="mx-auto max-w-2xl divide-y divide-gray-200 dark:divide-gray-700">
            { for props.entries.iter().enumerate().map(|(i, entry)| {
                let is_open = *open == Some(i);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |_: MouseEvent| open.set(toggle(*open, i)))
                };
                html! {
                    <div>
                        <button {onclick}
                            class="faq-question flex w-full items-center justify-between py-4 text-left font-medium text-gray-900 dark:text-white">
                            <span>{ entry.question.clone() }</span>
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                                class={classes!(
                                    "faq-icon", "h-5", "w-5", "flex-shrink-0",
                                    "transition-transform", "duration-200",
                                    is_open.then_some("rotate-180"),
                                )}>
                                <path stroke-linecap="round" stroke-linejoin="round" d="M6 9l6 6 6-6" />
                            </svg>
                        </button>
                        <div class={classes!(
                            "faq-answer", "pb-4", "text-gray-600", "dark:text-gray-300",
                            (!is_open).then_some("hidden"),
                        )}>
                            <p>{ entry.answer.clone() }</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_a_closed_entry_opens_it() {
        assert_eq!(toggle(None, 2), Some(2));
    }

    #[test]
    fn clicking_the_open_entry_closes_it() {
        assert_eq!(toggle(Some(2), 2), None);
    }

    #[test]
    fn opening_another_entry_replaces_the_open_one() {
        assert_eq!(toggle(Some(0), 3), Some(3));
    }

    #[test]
    fn at_most_one_entry_open_after_any_click_sequence() {
        let clicks = [0, 1, 1, 2, 0, 0, 3];
        let mut open = None;
        for clicked in clicks {
            open = toggle(open, clicked);
            // Option<usize> by construction holds zero or one open entry.
            if let Some(index) = open {
                assert!(index <= 3);
            }
        }
        assert_eq!(open, Some(3));
    }
}
