mod wheel_canvas;
mod wheel_utils;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use wheel_shared::i18n::{self, Language, MessageKey};
use wheel_shared::{spin_to_outcome, Outcome, QuotaStore, SpinConfig, WheelConfig, WheelGame};
use yew::prelude::*;

use crate::config::{browser_language, load_wheel_config};
use crate::frame_clock::AnimationFrameClock;
use crate::storage::BrowserStorage;
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_utils::{LanguageSelect, ResultDisplay, SpinButton, StatusCards};

// Add custom CSS for animations
const CUSTOM_CSS: &str = r#"
@keyframes pulse-subtle {
    0% {
        transform: scale(1);
        box-shadow: 0 0 0 0 rgba(255, 215, 0, 0.4);
    }
    70% {
        transform: scale(1.02);
        box-shadow: 0 0 0 10px rgba(255, 215, 0, 0);
    }
    100% {
        transform: scale(1);
        box-shadow: 0 0 0 0 rgba(255, 215, 0, 0);
    }
}

.animate-pulse-subtle {
    animation: pulse-subtle 2s infinite;
}
"#;

fn create_game(config: &WheelConfig, storage: BrowserStorage) -> WheelGame<BrowserStorage> {
    let spin_config = config.spin_config().unwrap_or_else(|e| {
        log::warn!("Spin settings rejected ({}), using defaults", e);
        SpinConfig::default()
    });
    let store = QuotaStore::with_defaults(storage, &config.storage_key, config.default_quotas);
    WheelGame::new(config.layout.build(), spin_config, store)
}

#[function_component(WheelGamePage)]
pub fn wheel_game_page() -> Html {
    let game = use_mut_ref(|| create_game(&load_wheel_config(), BrowserStorage::open()));

    // Game state mirrored for rendering
    let rotation = use_state(|| game.borrow().angle());
    let quotas = use_state(|| game.borrow().quotas());
    let is_spinning = use_state(|| false);
    let outcome = use_state(|| None::<Outcome>);
    let language = use_state(|| {
        let tag = browser_language();
        i18n::load_language(game.borrow().store().storage(), tag.as_deref())
    });

    // Keep the document title and lang attribute in step with the language
    {
        use_effect_with(*language, move |language| {
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(i18n::translate(*language, MessageKey::Title));
                if let Some(root) = document.document_element() {
                    let _ = root.set_attribute("lang", language.code());
                }
            }
            || ()
        });
    }

    let start_spin = {
        let game = game.clone();
        let rotation = rotation.clone();
        let quotas = quotas.clone();
        let is_spinning = is_spinning.clone();
        let outcome = outcome.clone();

        Callback::from(move |_: MouseEvent| {
            if game.borrow().is_spinning() {
                return;
            }

            let game = game.clone();
            let rotation = rotation.clone();
            let quotas = quotas.clone();
            let is_spinning = is_spinning.clone();
            let outcome = outcome.clone();

            spawn_local(async move {
                is_spinning.set(true);
                outcome.set(None);

                let mut rng = SmallRng::from_entropy();
                let mut clock = AnimationFrameClock::new();
                let on_frame = {
                    let rotation = rotation.clone();
                    move |angle: f64| rotation.set(angle)
                };

                // None means another click already started this spin; that task owns the flags
                if let Some(result) = spin_to_outcome(&*game, &mut rng, &mut clock, on_frame).await {
                    quotas.set(result.quotas);
                    outcome.set(Some(result.outcome));
                    is_spinning.set(false);
                }
            });
        })
    };

    let reset_quotas = {
        let game = game.clone();
        let quotas = quotas.clone();
        let outcome = outcome.clone();

        Callback::from(move |_: MouseEvent| {
            let result = game.borrow_mut().reset();
            quotas.set(game.borrow().quotas());
            outcome.set(Some(result));
        })
    };

    let change_language = {
        let game = game.clone();
        let language = language.clone();
        Callback::from(move |lang: Language| {
            i18n::save_language(game.borrow_mut().storage_mut(), lang);
            language.set(lang);
        })
    };

    let lang = *language;
    let layout = game.borrow().layout().clone();
    let defaults = game.borrow().store().defaults();
    let subtitle = i18n::subtitle(lang, &layout, defaults);

    html! {
        <div class={styles::CONTAINER}>
            <style>{CUSTOM_CSS}</style>
            <div class="container mx-auto px-4 py-8 max-w-2xl">
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                            <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">
                                {i18n::translate(lang, MessageKey::Title)}
                            </span>
                        </h1>
                        <p class={classes!("mt-1", styles::TEXT_SMALL)}>{subtitle}</p>
                    </div>
                    <div class="w-40">
                        <LanguageSelect language={lang} onchange={change_language} />
                    </div>
                </div>

                <div class="bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl border border-gray-100 dark:border-gray-700">
                    <div class="relative mx-auto mb-8 flex justify-center items-center">
                        <div class="w-full max-w-[520px] mx-auto">
                            <WheelCanvas
                                rotation={*rotation}
                                is_spinning={*is_spinning}
                                layout={layout}
                                language={lang}
                            />
                        </div>
                    </div>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-4">
                        <div class="w-full max-w-[300px]">
                            <SpinButton is_spinning={*is_spinning} language={lang} onclick={start_spin} />
                        </div>
                        <button
                            class={styles::BUTTON_SECONDARY}
                            title={i18n::translate(lang, MessageKey::ResetQuotaTitle)}
                            onclick={reset_quotas}
                        >
                            {i18n::translate(lang, MessageKey::ResetQuota)}
                        </button>
                    </div>

                    <div class="mt-6">
                        <ResultDisplay outcome={*outcome} is_spinning={*is_spinning} language={lang} />
                    </div>

                    <StatusCards quotas={*quotas} defaults={defaults} language={lang} />

                    <p class={classes!("mt-6", "text-center", styles::TEXT_SMALL)}>
                        {i18n::translate(lang, MessageKey::Note)}
                    </p>
                </div>

                <p class={classes!("mt-4", "text-center", styles::TEXT_SMALL)}>
                    {i18n::translate(lang, MessageKey::Footer)}
                </p>
            </div>
        </div>
    }
}
