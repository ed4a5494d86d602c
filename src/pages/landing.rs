use yew::prelude::*;

use crate::components::application_form::ApplicationForm;
use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::components::gallery::PhotoGallery;
use crate::components::header::Header;
use crate::components::video_carousel::VideoCarousel;

fn gallery_images() -> Vec<AttrValue> {
    vec![
        "/assets/gallery/training-01.jpg".into(),
        "/assets/gallery/training-02.jpg".into(),
        "/assets/gallery/training-03.jpg".into(),
        "/assets/gallery/range-01.jpg".into(),
        "/assets/gallery/range-02.jpg".into(),
        "/assets/gallery/tactical-medicine.jpg".into(),
    ]
}

fn carousel_videos() -> Vec<AttrValue> {
    vec![
        "/assets/videos/course-overview.mp4".into(),
        "/assets/videos/range-day.mp4".into(),
        "/assets/videos/medic-drill.mp4".into(),
        "/assets/videos/graduation.mp4".into(),
    ]
}

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "Чи потрібен попередній досвід?",
            "Ні. Базовий курс розрахований на людей без жодної підготовки; інструктори ведуть групу від нуля.",
        ),
        FaqEntry::new(
            "Скільки триває навчання?",
            "Базовий курс триває два тижні, поглиблені модулі — від трьох днів до місяця залежно від напряму.",
        ),
        FaqEntry::new(
            "Що взяти з собою?",
            "Зручний одяг за погодою, документи та воду. Усе спорядження для занять видає центр.",
        ),
        FaqEntry::new(
            "Чи є навчання для цивільних?",
            "Так, окремі групи для цивільних проходять щомісяця. Статус вкажіть у заявці, і ми підберемо потік.",
        ),
        FaqEntry::new(
            "Скільки коштує курс?",
            "Для військовослужбовців навчання безкоштовне. Вартість для цивільних залежить від модуля — залиште заявку, і ми зорієнтуємо.",
        ),
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page text-gray-900 dark:text-gray-100">
            <Header />

            <section class="flex min-h-screen flex-col items-center justify-center px-4 text-center"
                style="padding-top: var(--header-offset, 104px);">
                <h1 class="mb-4 max-w-3xl text-4xl font-bold md:text-6xl">
                    {"Навчаємо тих, хто захищає"}
                </h1>
                <p class="mb-8 max-w-xl text-lg text-gray-600 dark:text-gray-300">
                    {"Центр тактичної підготовки: стрілецька справа, тактична медицина та злагодження підрозділів."}
                </p>
                <a href="#contacts" class="rounded-lg bg-primary px-8 py-3 font-semibold text-gray-900">
                    {"Залишити заявку"}
                </a>
            </section>

            <section id="about" class="mx-auto max-w-4xl px-4 py-16">
                <h2 class="mb-6 text-3xl font-bold">{"Про нас"}</h2>
                <p class="text-gray-600 dark:text-gray-300">
                    {"Інструктори з бойовим досвідом, власний полігон та програми, \
                      побудовані на реальних сценаріях. Понад дві тисячі випускників \
                      за три роки роботи центру."}
                </p>
            </section>

            <section id="gallery" class="mx-auto max-w-5xl px-4 py-16">
                <h2 class="mb-6 text-3xl font-bold">{"Галерея"}</h2>
                <PhotoGallery images={gallery_images()} />
            </section>

            <section id="videos" class="mx-auto max-w-5xl px-4 py-16">
                <h2 class="mb-6 text-3xl font-bold">{"Відео з занять"}</h2>
                <VideoCarousel videos={carousel_videos()} />
            </section>

            <section id="faq" class="mx-auto max-w-4xl px-4 py-16">
                <h2 class="mb-6 text-3xl font-bold">{"Часті питання"}</h2>
                <FaqAccordion entries={faq_entries()} />
            </section>

            <section id="contacts" class="mx-auto max-w-4xl px-4 py-16">
                <h2 class="mb-6 text-3xl font-bold">{"Залишити заявку"}</h2>
                <ApplicationForm />
            </section>

            <footer class="border-t border-gray-200 px-4 py-8 text-center text-sm text-gray-500 dark:border-gray-800">
                {"© 2026 Центр тактичної підготовки"}
            </footer>
        </div>
    }
}
