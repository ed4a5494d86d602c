//! Application form: builds the relay parameter record from the controlled
//! fields and maps the single relay call's outcome onto the success or
//! error dialog.

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::enhanced_select::{slot_after_toggle, EnhancedSelect, SelectOption};
use crate::components::modal::Modal;
use crate::utils::relay::{self, TemplateParams};

pub const SUBMIT_LABEL: &str = "Відправити заявку";
pub const BUSY_LABEL: &str = "Відправляється...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
}

pub fn submit_label(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => SUBMIT_LABEL,
        FormStatus::Submitting => BUSY_LABEL,
    }
}

/// A submit already in flight swallows further submit events until the
/// relay call settles.
pub fn can_submit(status: FormStatus) -> bool {
    status == FormStatus::Idle
}

fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::placeholder("Оберіть статус"),
        SelectOption::new("Цивільний", "Цивільний"),
        SelectOption::new("Військовослужбовець", "Військовослужбовець"),
        SelectOption::new("Ветеран", "Ветеран"),
    ]
}

fn rank_options() -> Vec<SelectOption> {
    vec![
        SelectOption::placeholder("Оберіть звання"),
        SelectOption::new("Без звання", "Без звання"),
        SelectOption::new("Солдат", "Солдат"),
        SelectOption::new("Сержант", "Сержант"),
        SelectOption::new("Офіцер", "Офіцер"),
    ]
}

#[function_component(ApplicationForm)]
pub fn application_form() -> Html {
    let fields = use_state(TemplateParams::default);
    let status = use_state(FormStatus::default);
    let success_open = use_state(|| false);
    let error_open = use_state(|| false);
    // At most one select overlay is open across the whole page.
    let open_select = use_state(|| None::<&'static str>);

    let text_field = |write: fn(&mut TemplateParams, String)| {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            write(&mut next, input.value());
            fields.set(next);
        })
    };

    let comment_change = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.user_comment = input.value();
            fields.set(next);
        })
    };

    let select_field = |id: &'static str, write: fn(&mut TemplateParams, String)| {
        let fields = fields.clone();
        let open_select = open_select.clone();
        (
            *open_select == Some(id),
            Callback::from(move |open: bool| {
                open_select.set(slot_after_toggle(*open_select, id, open));
            }),
            Callback::from(move |value: String| {
                let mut next = (*fields).clone();
                write(&mut next, value);
                fields.set(next);
            }),
        )
    };

    let (status_open, status_toggle, status_change) =
        select_field("user_status", |f, v| f.user_status = v);
    let (rank_open, rank_toggle, rank_change) = select_field("user_rank", |f, v| f.user_rank = v);

    let onsubmit = {
        let fields = fields.clone();
        let status = status.clone();
        let success_open = success_open.clone();
        let error_open = error_open.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !can_submit(*status) {
                return;
            }

            success_open.set(false);
            error_open.set(false);
            status.set(FormStatus::Submitting);

            let params = (*fields).clone();
            gloo_console::log!(
                "submitting application:",
                serde_json::to_string(&params).unwrap_or_default()
            );

            if !relay::is_configured() {
                log::error!("relay service or template id missing, check the build environment");
                error_open.set(true);
                status.set(FormStatus::Idle);
                return;
            }

            let fields = fields.clone();
            let status = status.clone();
            let success_open = success_open.clone();
            let error_open = error_open.clone();
            spawn_local(async move {
                match relay::send_application(&params).await {
                    Ok(response) => {
                        log::info!("relay accepted: status {} {}", response.status, response.text);
                        success_open.set(true);
                        fields.set(TemplateParams::default());
                    }
                    Err(err) => {
                        log::error!("relay call failed: {err}");
                        error_open.set(true);
                    }
                }
                // Runs on both outcomes.
                status.set(FormStatus::Idle);
            });
        })
    };

    let close_success = {
        let success_open = success_open.clone();
        Callback::from(move |()| success_open.set(false))
    };
    let close_error = {
        let error_open = error_open.clone();
        Callback::from(move |()| error_open.set(false))
    };
    let close_success_click = {
        let success_open = success_open.clone();
        Callback::from(move |_: MouseEvent| success_open.set(false))
    };
    let close_error_click = {
        let error_open = error_open.clone();
        Callback::from(move |_: MouseEvent| error_open.set(false))
    };

    let submitting = *status == FormStatus::Submitting;

    html! {
        <>
            <form id="applicationForm" {onsubmit} class="mx-auto max-w-xl space-y-4">
                <div>
                    <label class="mb-1 block text-sm text-gray-600 dark:text-gray-400" for="user_name">
                        {"Ім'я та прізвище"}
                    </label>
                    <input id="user_name" name="user_name" type="text" required=true
                        value={fields.user_name.clone()}
                        onchange={text_field(|f, v| f.user_name = v)}
                        class="w-full h-11 rounded-lg bg-gray-100 dark:bg-gray-800 px-4 focus:outline-none focus:ring-2 focus:ring-primary" />
                </div>
                <div>
                    <label class="mb-1 block text-sm text-gray-600 dark:text-gray-400" for="user_phone">
                        {"Номер телефону"}
                    </label>
                    <input id="user_phone" name="user_phone" type="tel" required=true
                        value={fields.user_phone.clone()}
                        onchange={text_field(|f, v| f.user_phone = v)}
                        class="w-full h-11 rounded-lg bg-gray-100 dark:bg-gray-800 px-4 focus:outline-none focus:ring-2 focus:ring-primary" />
                </div>
                <div>
                    <label class="mb-1 block text-sm text-gray-600 dark:text-gray-400" for="user_age">
                        {"Вік"}
                    </label>
                    <input id="user_age" name="user_age" type="number" min="18" max="60"
                        value={fields.user_age.clone()}
                        onchange={text_field(|f, v| f.user_age = v)}
                        class="w-full h-11 rounded-lg bg-gray-100 dark:bg-gray-800 px-4 focus:outline-none focus:ring-2 focus:ring-primary" />
                </div>
                <div>
                    <label class="mb-1 block text-sm text-gray-600 dark:text-gray-400">
                        {"Статус"}
                    </label>
                    <EnhancedSelect
                        name="user_status"
                        options={status_options()}
                        value={fields.user_status.clone()}
                        on_change={status_change}
                        is_open={status_open}
                        on_toggle={status_toggle} />
                </div>
                <div>
                    <label class="mb-1 block text-sm text-gray-600 dark:text-gray-400">
                        {"Звання"}
                    </label>
                    <EnhancedSelect
                        name="user_rank"
                        options={rank_options()}
                        value={fields.user_rank.clone()}
                        on_change={rank_change}
                        is_open={rank_open}
                        on_toggle={rank_toggle} />
                </div>
                <div>
                    <label class="mb-1 block text-sm text-gray-600 dark:text-gray-400" for="user_comment">
                        {"Коментар"}
                    </label>
                    <textarea id="user_comment" name="user_comment" rows="4"
                        value={fields.user_comment.clone()}
                        onchange={comment_change}
                        class="w-full rounded-lg bg-gray-100 dark:bg-gray-800 px-4 py-3 focus:outline-none focus:ring-2 focus:ring-primary" />
                </div>
                <button type="submit" disabled={submitting}
                    class="w-full h-12 rounded-lg bg-primary font-semibold text-gray-900 transition-opacity disabled:opacity-60">
                    <span class="truncate">{ submit_label(*status) }</span>
                </button>
            </form>

            <Modal id="successModal" open={*success_open} on_close={close_success}>
                <h3 class="mb-2 text-2xl font-bold text-gray-900 dark:text-white">
                    {"Дякуємо за заявку!"}
                </h3>
                <p class="mb-6 text-gray-600 dark:text-gray-300">
                    {"Ми зв'яжемося з вами найближчим часом."}
                </p>
                <button onclick={close_success_click}
                    class="h-11 rounded-lg bg-primary px-8 font-semibold text-gray-900">
                    {"Добре"}
                </button>
            </Modal>
            <Modal id="errorModal" open={*error_open} on_close={close_error}>
                <h3 class="mb-2 text-2xl font-bold text-gray-900 dark:text-white">
                    {"Щось пішло не так"}
                </h3>
                <p class="mb-6 text-gray-600 dark:text-gray-300">
                    {"Не вдалося відправити заявку. Спробуйте ще раз або зателефонуйте нам."}
                </p>
                <button onclick={close_error_click}
                    class="h-11 rounded-lg bg-primary px-8 font-semibold text-gray-900">
                    {"Закрити"}
                </button>
            </Modal>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_the_initial_status() {
        assert_eq!(FormStatus::default(), FormStatus::Idle);
    }

    #[test]
    fn submit_label_swaps_while_submitting() {
        assert_eq!(submit_label(FormStatus::Idle), SUBMIT_LABEL);
        assert_eq!(submit_label(FormStatus::Submitting), BUSY_LABEL);
    }

    #[test]
    fn submit_in_flight_blocks_reentry() {
        assert!(can_submit(FormStatus::Idle));
        assert!(!can_submit(FormStatus::Submitting));
    }

    #[test]
    fn both_selects_start_from_a_placeholder() {
        assert!(status_options()[0].disabled && status_options()[0].hidden);
        assert!(rank_options()[0].disabled && rank_options()[0].hidden);
    }
}
