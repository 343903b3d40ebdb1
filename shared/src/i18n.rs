use serde::{Deserialize, Serialize};

use crate::constants::LANGUAGE_STORAGE_KEY;
use crate::prize::{PrizeId, QuotaState};
use crate::quota_store::KeyValueStorage;
use crate::segment::SegmentLayout;
use crate::shared_wheel_game::Outcome;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "en")]
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::ZhCn, Language::ZhTw, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
            Self::En => "en",
        }
    }

    /// Name shown in the language picker, always in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::ZhCn => "简体中文",
            Self::ZhTw => "繁體中文",
            Self::En => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Picks a supported language for a browser language tag such as `zh-HK` or `en-US`.
    pub fn detect(browser_tag: &str) -> Self {
        if browser_tag.starts_with("zh-TW") || browser_tag.starts_with("zh-HK") {
            Self::ZhTw
        } else if browser_tag.starts_with("zh") {
            Self::ZhCn
        } else {
            Self::En
        }
    }
}

/// Stored choice first, then the browser's language.
pub fn load_language<S: KeyValueStorage>(storage: &S, browser_tag: Option<&str>) -> Language {
    let stored = match storage.get_item(LANGUAGE_STORAGE_KEY) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Failed to read stored language: {}", e);
            None
        }
    };
    stored
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or_else(|| browser_tag.map(Language::detect).unwrap_or_default())
}

pub fn save_language<S: KeyValueStorage>(storage: &mut S, lang: Language) {
    if let Err(e) = storage.set_item(LANGUAGE_STORAGE_KEY, lang.code()) {
        log::warn!("Failed to persist language: {}", e);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Title,
    Subtitle,
    StartSpin,
    ResetQuota,
    ResetQuotaTitle,
    Note,
    Footer,
    FirstPrize,
    SecondPrize,
    ThirdPrize,
    ThankYou,
    Spinning,
    Congratulations,
    ThanksForParticipation,
    PrizeExhausted,
    QuotaReset,
    Remaining,
    Exhausted,
    TotalQuota,
}

impl MessageKey {
    pub const ALL: [MessageKey; 19] = [
        MessageKey::Title,
        MessageKey::Subtitle,
        MessageKey::StartSpin,
        MessageKey::ResetQuota,
        MessageKey::ResetQuotaTitle,
        MessageKey::Note,
        MessageKey::Footer,
        MessageKey::FirstPrize,
        MessageKey::SecondPrize,
        MessageKey::ThirdPrize,
        MessageKey::ThankYou,
        MessageKey::Spinning,
        MessageKey::Congratulations,
        MessageKey::ThanksForParticipation,
        MessageKey::PrizeExhausted,
        MessageKey::QuotaReset,
        MessageKey::Remaining,
        MessageKey::Exhausted,
        MessageKey::TotalQuota,
    ];
}

pub fn translate(lang: Language, key: MessageKey) -> &'static str {
    use MessageKey::*;
    match lang {
        Language::ZhCn => match key {
            Title => "转盘抽奖",
            Subtitle => "{sections}格 · {colors}种颜色 · 一等奖{first}名 · 二等奖{second}名 · 三等奖{third}名",
            StartSpin => "开始抽奖",
            ResetQuota => "重置名额",
            ResetQuotaTitle => "恢复一等奖/二等奖/三等奖名额",
            Note => "说明：每个大奖仅1名。抽到已抽完的大奖视为未中奖。",
            Footer => "纯前端示例，名额状态保存在本地浏览器（localStorage）。",
            FirstPrize => "一等奖",
            SecondPrize => "二等奖",
            ThirdPrize => "三等奖",
            ThankYou => "谢谢参与",
            Spinning => "正在抽取…",
            Congratulations => "恭喜获得：{prize}！",
            ThanksForParticipation => "谢谢参与，下次好运！",
            PrizeExhausted => "{prize} 名额已抽完，本次视为未中奖。",
            QuotaReset => "名额已重置。",
            Remaining => "剩余 {count}",
            Exhausted => "已抽完",
            TotalQuota => "总名额：{count} · 本地保存",
        },
        Language::ZhTw => match key {
            Title => "轉盤抽獎",
            Subtitle => "{sections}格 · {colors}種顏色 · 一等獎{first}名 · 二等獎{second}名 · 三等獎{third}名",
            StartSpin => "開始抽獎",
            ResetQuota => "重置名額",
            ResetQuotaTitle => "恢復一等獎/二等獎/三等獎名額",
            Note => "說明：每個大獎僅1名。抽到已抽完的大獎視為未中獎。",
            Footer => "純前端示例，名額狀態保存在本地瀏覽器（localStorage）。",
            FirstPrize => "一等獎",
            SecondPrize => "二等獎",
            ThirdPrize => "三等獎",
            ThankYou => "謝謝參與",
            Spinning => "正在抽取…",
            Congratulations => "恭喜獲得：{prize}！",
            ThanksForParticipation => "謝謝參與，下次好運！",
            PrizeExhausted => "{prize} 名額已抽完，本次視為未中獎。",
            QuotaReset => "名額已重置。",
            Remaining => "剩餘 {count}",
            Exhausted => "已抽完",
            TotalQuota => "總名額：{count} · 本地保存",
        },
        Language::En => match key {
            Title => "Lucky Wheel",
            Subtitle => "{sections} Sections · {colors} Colors · 1st Prize ×{first} · 2nd Prize ×{second} · 3rd Prize ×{third}",
            StartSpin => "Start Spin",
            ResetQuota => "Reset Quota",
            ResetQuotaTitle => "Restore quotas for 1st/2nd/3rd prizes",
            Note => "Note: Each major prize has only 1 quota. Drawing an exhausted prize counts as no prize.",
            Footer => "Frontend demo, quota status saved in local browser (localStorage).",
            FirstPrize => "1st Prize",
            SecondPrize => "2nd Prize",
            ThirdPrize => "3rd Prize",
            ThankYou => "Thank You",
            Spinning => "Drawing...",
            Congratulations => "Congratulations! You won: {prize}!",
            ThanksForParticipation => "Thank you for participating, better luck next time!",
            PrizeExhausted => "{prize} quota exhausted, this draw counts as no prize.",
            QuotaReset => "Quota has been reset.",
            Remaining => "{count} left",
            Exhausted => "Exhausted",
            TotalQuota => "Total quota: {count} · Locally saved",
        },
    }
}

/// Translates `key` and fills `{name}` placeholders from `params`.
pub fn translate_with(lang: Language, key: MessageKey, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(translate(lang, key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
}

pub fn prize_name(lang: Language, prize: PrizeId) -> &'static str {
    let key = match prize {
        PrizeId::First => MessageKey::FirstPrize,
        PrizeId::Second => MessageKey::SecondPrize,
        PrizeId::Third => MessageKey::ThirdPrize,
    };
    translate(lang, key)
}

pub fn outcome_message(lang: Language, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Won(prize) => translate_with(lang, MessageKey::Congratulations, &[("prize", prize_name(lang, *prize))]),
        Outcome::PrizeExhausted(prize) => {
            translate_with(lang, MessageKey::PrizeExhausted, &[("prize", prize_name(lang, *prize))])
        }
        Outcome::NoPrize => translate(lang, MessageKey::ThanksForParticipation).to_string(),
        Outcome::QuotaReset => translate(lang, MessageKey::QuotaReset).to_string(),
    }
}

/// Summary line under the title, counted from the layout and the configured quotas.
pub fn subtitle(lang: Language, layout: &SegmentLayout, quotas: QuotaState) -> String {
    let sections = layout.len().to_string();
    let colors = layout.color_count().to_string();
    let first = quotas.first.to_string();
    let second = quotas.second.to_string();
    let third = quotas.third.to_string();
    translate_with(
        lang,
        MessageKey::Subtitle,
        &[
            ("sections", sections.as_str()),
            ("colors", colors.as_str()),
            ("first", first.as_str()),
            ("second", second.as_str()),
            ("third", third.as_str()),
        ],
    )
}

/// Badge text for a prize's status card.
pub fn remaining_badge(lang: Language, remaining: u32) -> String {
    if remaining > 0 {
        let count = remaining.to_string();
        translate_with(lang, MessageKey::Remaining, &[("count", count.as_str())])
    } else {
        translate(lang, MessageKey::Exhausted).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quota_store::MemoryStorage;

    #[test]
    fn test_every_language_has_every_message() {
        for lang in Language::ALL {
            for key in MessageKey::ALL {
                assert!(!translate(lang, key).is_empty(), "{:?} {:?}", lang, key);
            }
        }
    }

    #[test]
    fn test_parameter_substitution() {
        assert_eq!(
            outcome_message(Language::En, &Outcome::Won(PrizeId::Second)),
            "Congratulations! You won: 2nd Prize!"
        );
        assert_eq!(
            outcome_message(Language::ZhCn, &Outcome::PrizeExhausted(PrizeId::First)),
            "一等奖 名额已抽完，本次视为未中奖。"
        );
        assert_eq!(remaining_badge(Language::En, 2), "2 left");
        assert_eq!(remaining_badge(Language::ZhTw, 0), "已抽完");
        assert_eq!(translate_with(Language::En, MessageKey::Title, &[("unused", "x")]), "Lucky Wheel");
    }

    #[test]
    fn test_subtitle_counts_the_layout() {
        assert_eq!(
            subtitle(Language::ZhCn, &SegmentLayout::octagon(), QuotaState::uniform(1)),
            "8格 · 8种颜色 · 一等奖1名 · 二等奖1名 · 三等奖1名"
        );
        assert_eq!(
            subtitle(Language::En, &SegmentLayout::classic(), QuotaState { first: 2, second: 1, third: 1 }),
            "7 Sections · 7 Colors · 1st Prize ×2 · 2nd Prize ×1 · 3rd Prize ×1"
        );
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(Language::detect("zh-TW"), Language::ZhTw);
        assert_eq!(Language::detect("zh-HK"), Language::ZhTw);
        assert_eq!(Language::detect("zh-CN"), Language::ZhCn);
        assert_eq!(Language::detect("zh"), Language::ZhCn);
        assert_eq!(Language::detect("en-US"), Language::En);
        assert_eq!(Language::detect("fr"), Language::En);
    }

    #[test]
    fn test_language_persistence() {
        let mut storage = MemoryStorage::new();
        assert_eq!(load_language(&storage, Some("zh-HK")), Language::ZhTw);
        assert_eq!(load_language(&storage, None), Language::ZhCn);

        save_language(&mut storage, Language::En);
        assert_eq!(load_language(&storage, Some("zh-HK")), Language::En);

        let garbage = MemoryStorage::new().with_item(LANGUAGE_STORAGE_KEY, "klingon");
        assert_eq!(load_language(&garbage, Some("en-GB")), Language::En);
    }
}
