use web_sys::HtmlSelectElement;
use wheel_shared::i18n::{self, Language, MessageKey};
use wheel_shared::{Outcome, PrizeId, QuotaState};
use yew::prelude::*;

use crate::styles;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub outcome: Option<Outcome>,
    pub is_spinning: bool,
    pub language: Language,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if props.is_spinning {
        return html! {
            <p class={classes!("text-center", "animate-pulse", styles::TEXT_BODY)}>
                {i18n::translate(props.language, MessageKey::Spinning)}
            </p>
        };
    }

    match &props.outcome {
        Some(outcome) => {
            let class = if outcome.is_win() { styles::CARD_SUCCESS } else { styles::CARD_NEUTRAL };
            html! {
                <div class={classes!("text-center", class)}>
                    {i18n::outcome_message(props.language, outcome)}
                </div>
            }
        }
        None => html! {},
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub language: Language,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        i18n::translate(props.language, MessageKey::Spinning)
    } else {
        i18n::translate(props.language, MessageKey::StartSpin)
    };

    let button_class = if props.is_spinning {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0 animate-pulse-subtle"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={props.is_spinning}
                class={classes!(
                    "relative",
                    "w-full",
                    "px-8",
                    "py-4",
                    "font-bold",
                    "text-lg",
                    "transition-all",
                    "duration-300",
                    "focus:outline-none",
                    "focus:ring-4",
                    "focus:ring-yellow-300",
                    "bg-transparent",
                )}
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusCardsProps {
    pub quotas: QuotaState,
    pub defaults: QuotaState,
    pub language: Language,
}

#[function_component(StatusCards)]
pub fn status_cards(props: &StatusCardsProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-3 mt-6">
            { for PrizeId::ALL.iter().map(|&prize| {
                let remaining = props.quotas.remaining(prize);
                let badge_class = if remaining > 0 { styles::BADGE_OK } else { styles::BADGE_OUT };
                let total = props.defaults.remaining(prize).to_string();
                html! {
                    <div class={styles::CARD}>
                        <h3 class={styles::TEXT_H3}>
                            {i18n::prize_name(props.language, prize)}
                            <span class={badge_class}>{i18n::remaining_badge(props.language, remaining)}</span>
                        </h3>
                        <div class={styles::TEXT_SMALL}>
                            {i18n::translate_with(props.language, MessageKey::TotalQuota, &[("count", total.as_str())])}
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageSelectProps {
    pub language: Language,
    pub onchange: Callback<Language>,
}

#[function_component(LanguageSelect)]
pub fn language_select(props: &LanguageSelectProps) -> Html {
    let onchange = {
        let callback = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match Language::from_code(&select.value()) {
                Some(lang) => callback.emit(lang),
                None => log::warn!("Unknown language {:?}", select.value()),
            }
        })
    };

    html! {
        <select class={styles::INPUT} {onchange}>
            { for Language::ALL.iter().map(|lang| html! {
                <option value={lang.code()} selected={*lang == props.language}>
                    {lang.native_name()}
                </option>
            }) }
        </select>
    }
}
