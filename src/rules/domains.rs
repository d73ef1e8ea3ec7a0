//! Keyword sets for life-domain classification.
//!
//! Matching is a deliberate low-tech heuristic: lowercase substring search,
//! OR across the list, over the concatenation of all labels and
//! descriptions. The word stems (Russian + English) are part of the
//! behavioral contract and must not be "improved" with stemming or NLP.

use super::catalog::RuleId;

/// One life domain the coverage rule checks for.
pub struct LifeArea {
    pub id: &'static str,
    pub rule_id: RuleId,
    pub name: &'static str,
    pub emoji: &'static str,
    pub keywords: &'static [&'static str],
}

pub const LIFE_AREAS: [LifeArea; 6] = [
    LifeArea {
        id: "health",
        rule_id: RuleId::LifeNoHealth,
        name: "Здоровье/Спорт",
        emoji: "💪",
        keywords: &[
            "здоровь", "спорт", "фитнес", "тренировк", "тело", "зож", "питани", "сон", "health",
            "gym",
        ],
    },
    LifeArea {
        id: "relationships",
        rule_id: RuleId::LifeNoRelationships,
        name: "Личная жизнь/Отношения",
        emoji: "❤️",
        keywords: &[
            "отношени",
            "семь",
            "личн",
            "друз",
            "любовь",
            "девушк",
            "парен",
            "жен",
            "муж",
            "relationship",
            "family",
        ],
    },
    LifeArea {
        id: "finance",
        rule_id: RuleId::LifeNoFinance,
        name: "Финансы",
        emoji: "💰",
        keywords: &[
            "финанс",
            "деньг",
            "бюджет",
            "инвестиц",
            "доход",
            "расход",
            "накоплен",
            "finance",
            "money",
            "invest",
        ],
    },
    LifeArea {
        id: "skills",
        rule_id: RuleId::LifeNoSkills,
        name: "Навыки/Обучение",
        emoji: "📚",
        keywords: &[
            "навык",
            "обучен",
            "курс",
            "книг",
            "развити",
            "учёб",
            "учеб",
            "образован",
            "skill",
            "learn",
            "study",
        ],
    },
    LifeArea {
        id: "rest",
        rule_id: RuleId::LifeNoRest,
        name: "Отдых/Восстановление",
        emoji: "🧘",
        keywords: &[
            "отдых",
            "восстановлен",
            "медитац",
            "хобби",
            "развлечен",
            "отпуск",
            "релакс",
            "rest",
            "hobby",
        ],
    },
    LifeArea {
        id: "routine",
        rule_id: RuleId::LifeNoRoutine,
        name: "Рутина/Привычки",
        emoji: "⏰",
        keywords: &[
            "рутин",
            "привычк",
            "распорядок",
            "расписани",
            "утро",
            "вечер",
            "daily",
            "routine",
            "habit",
        ],
    },
];

/// Word stems marking a node as business-related; feeds the imbalance rule.
pub const BUSINESS_KEYWORDS: [&str; 8] = [
    "бизнес", "продаж", "клиент", "лид", "маркетинг", "выручк", "mvp", "продукт",
];
