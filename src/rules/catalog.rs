//! The fixed rule catalog. Every finding the engine can emit references one
//! of these ids; the enum is closed, so an unknown rule id cannot exist.

use super::finding::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a diagnostic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "gemba-empty")]
    GembaEmpty,
    #[serde(rename = "flow-no-value")]
    FlowNoValue,
    #[serde(rename = "pdca-no-plan")]
    PdcaNoPlan,
    #[serde(rename = "gemba-underdeveloped")]
    GembaUnderdeveloped,
    #[serde(rename = "flow-no-connections")]
    FlowNoConnections,
    #[serde(rename = "muda-waiting")]
    MudaWaiting,
    #[serde(rename = "muda-deadend")]
    MudaDeadend,
    #[serde(rename = "muda-defects")]
    MudaDefects,
    #[serde(rename = "muda-inventory")]
    MudaInventory,
    #[serde(rename = "muda-motion")]
    MudaMotion,
    #[serde(rename = "5s-sort")]
    FiveSSort,
    #[serde(rename = "5s-standardize")]
    FiveSStandardize,
    #[serde(rename = "pdca-no-metrics")]
    PdcaNoMetrics,
    #[serde(rename = "pdca-no-feedback")]
    PdcaNoFeedback,
    #[serde(rename = "jidoka-no-stop")]
    JidokaNoStop,
    #[serde(rename = "jit-overload")]
    JitOverload,
    #[serde(rename = "flow-isolated")]
    FlowIsolated,
    #[serde(rename = "flow-balance")]
    FlowBalance,
    #[serde(rename = "life-no-health")]
    LifeNoHealth,
    #[serde(rename = "life-no-relationships")]
    LifeNoRelationships,
    #[serde(rename = "life-no-finance")]
    LifeNoFinance,
    #[serde(rename = "life-no-skills")]
    LifeNoSkills,
    #[serde(rename = "life-no-rest")]
    LifeNoRest,
    #[serde(rename = "life-no-routine")]
    LifeNoRoutine,
    #[serde(rename = "life-no-goals")]
    LifeNoGoals,
    #[serde(rename = "life-unbalanced")]
    LifeUnbalanced,
    #[serde(rename = "life-complete")]
    LifeComplete,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().wire_id)
    }
}

/// Static description of one rule: what it checks and which methodology
/// principle backs it. The `principle` text is what failing findings carry.
pub struct RuleDescriptor {
    pub id: RuleId,
    pub wire_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub principle: &'static str,
}

impl RuleId {
    pub fn descriptor(self) -> &'static RuleDescriptor {
        let descriptor = &RULES[self as usize];
        debug_assert!(descriptor.id == self);
        descriptor
    }

    /// The whole catalog, in declaration order.
    pub fn catalog() -> &'static [RuleDescriptor] {
        &RULES
    }
}

static RULES: [RuleDescriptor; 27] = [
    RuleDescriptor {
        id: RuleId::GembaEmpty,
        wire_id: "gemba-empty",
        name: "Схема пустая",
        description: "Нет ни одного блока — нечего смотреть и нечего улучшать",
        category: Category::Gemba,
        principle: "現場 Gemba — иди и смотри. Если нечего смотреть — работа не началась.",
    },
    RuleDescriptor {
        id: RuleId::FlowNoValue,
        wire_id: "flow-no-value",
        name: "Нет потока ценности",
        description: "Пустая схема — поток создания ценности отсутствует",
        category: Category::Flow,
        principle: "Поток ценности — без потока нет создания ценности. Нулевой прогресс.",
    },
    RuleDescriptor {
        id: RuleId::PdcaNoPlan,
        wire_id: "pdca-no-plan",
        name: "Нет плана (Plan)",
        description: "Первый шаг PDCA — планирование — не выполнен",
        category: Category::Pdca,
        principle: "PDCA Plan — без плана нет действий. Начни с определения целей.",
    },
    RuleDescriptor {
        id: RuleId::GembaUnderdeveloped,
        wire_id: "gemba-underdeveloped",
        name: "Схема недоразвита",
        description: "Два блока или меньше — система слишком простая",
        category: Category::Gemba,
        principle: "現場 Gemba — реальная картина неполная. Добавь деталей.",
    },
    RuleDescriptor {
        id: RuleId::FlowNoConnections,
        wire_id: "flow-no-connections",
        name: "Нет связей",
        description: "Блоки есть, но ни один не связан с другим",
        category: Category::Flow,
        principle: "Поток ценности — изолированные элементы не создают систему.",
    },
    RuleDescriptor {
        id: RuleId::MudaWaiting,
        wire_id: "muda-waiting",
        name: "Потери ожидания",
        description: "Процесс без входящих связей — простаивает, ждёт данные",
        category: Category::Muda,
        principle: "無駄 Muda — устранение 7 видов потерь. Ожидание = время когда ресурс не создаёт ценность.",
    },
    RuleDescriptor {
        id: RuleId::MudaDeadend,
        wire_id: "muda-deadend",
        name: "Тупик (потери)",
        description: "Процесс без выхода — работа делается, но результат никуда не идёт",
        category: Category::Muda,
        principle: "無駄 Muda — перепроизводство/тупик. Если результат никому не нужен — это потеря.",
    },
    RuleDescriptor {
        id: RuleId::MudaDefects,
        wire_id: "muda-defects",
        name: "Потери от дефектов",
        description: "Узлы в статусе bottleneck — дефектный процесс тормозит всю систему",
        category: Category::Muda,
        principle: "無駄 Muda — дефекты. Исправление ошибок стоит в 10x дороже предотвращения.",
    },
    RuleDescriptor {
        id: RuleId::MudaInventory,
        wire_id: "muda-inventory",
        name: "Потери от запасов",
        description: "Узел с большим входящим потоком и маленьким исходящим — копятся \"запасы\"",
        category: Category::Muda,
        principle: "無駄 Muda — избыточные запасы. Накопление = замороженные ресурсы.",
    },
    RuleDescriptor {
        id: RuleId::MudaMotion,
        wire_id: "muda-motion",
        name: "Потери от лишних движений",
        description: "Один узел связан с 5+ другими — слишком много переключений",
        category: Category::Muda,
        principle: "無駄 Muda — лишние движения. Каждое переключение контекста = потеря фокуса.",
    },
    RuleDescriptor {
        id: RuleId::FiveSSort,
        wire_id: "5s-sort",
        name: "整理 Seiri — Сортировка",
        description: "Неактивные узлы занимают место на схеме — убери лишнее",
        category: Category::FiveS,
        principle: "5S Seiri — убери всё лишнее. Оставь только то, что нужно для работы.",
    },
    RuleDescriptor {
        id: RuleId::FiveSStandardize,
        wire_id: "5s-standardize",
        name: "清潔 Seiketsu — Стандартизация",
        description: "Есть дублирующиеся узлы с одинаковым названием",
        category: Category::FiveS,
        principle: "5S Seiketsu — создай стандарт. Каждый элемент должен быть уникальным.",
    },
    RuleDescriptor {
        id: RuleId::PdcaNoMetrics,
        wire_id: "pdca-no-metrics",
        name: "Нет метрик (Check)",
        description: "Узлы без метрик — невозможно проверить результат",
        category: Category::Pdca,
        principle: "PDCA Check — нельзя улучшить то, что не измеряешь. Добавь метрики.",
    },
    RuleDescriptor {
        id: RuleId::PdcaNoFeedback,
        wire_id: "pdca-no-feedback",
        name: "Нет обратной связи (Act)",
        description: "Линейная цепочка без обратных связей — нет цикла улучшений",
        category: Category::Pdca,
        principle: "PDCA Act — после проверки действуй. Обратная связь замыкает цикл улучшений.",
    },
    RuleDescriptor {
        id: RuleId::JidokaNoStop,
        wire_id: "jidoka-no-stop",
        name: "Нет автоматической остановки",
        description: "Есть bottleneck, но процессы после него продолжают работать",
        category: Category::Jidoka,
        principle: "自働化 Jidoka — остановись при обнаружении проблемы. Не передавай дефект дальше.",
    },
    RuleDescriptor {
        id: RuleId::JitOverload,
        wire_id: "jit-overload",
        name: "Перегрузка входа",
        description: "Слишком много входных потоков для одного процесса",
        category: Category::Jit,
        principle: "JIT — точно вовремя. Не перегружай процесс — подавай ровно столько, сколько может обработать.",
    },
    RuleDescriptor {
        id: RuleId::FlowIsolated,
        wire_id: "flow-isolated",
        name: "Изолированный узел",
        description: "Узел без связей — не участвует в потоке создания ценности",
        category: Category::Flow,
        principle: "Поток ценности — каждый элемент должен быть частью потока. Изолированный элемент = потеря.",
    },
    RuleDescriptor {
        id: RuleId::FlowBalance,
        wire_id: "flow-balance",
        name: "Дисбаланс потока",
        description: "Все связи идут через один узел — единая точка отказа",
        category: Category::Flow,
        principle: "Поток должен быть сбалансирован. Единая точка отказа = высокий риск остановки.",
    },
    RuleDescriptor {
        id: RuleId::LifeNoHealth,
        wire_id: "life-no-health",
        name: "Нет здоровья",
        description: "В системе нет блока про здоровье/спорт/тело",
        category: Category::Life,
        principle: "生活 Жизнь — здоровье = фундамент. Без энергии ни один процесс не работает на максимум.",
    },
    RuleDescriptor {
        id: RuleId::LifeNoRelationships,
        wire_id: "life-no-relationships",
        name: "Нет личной жизни",
        description: "В системе нет блока про отношения/семью/друзей",
        category: Category::Life,
        principle: "生活 Жизнь — человек без связей = изолированный узел. Отношения дают энергию и смысл.",
    },
    RuleDescriptor {
        id: RuleId::LifeNoFinance,
        wire_id: "life-no-finance",
        name: "Нет финансов",
        description: "В системе нет блока про финансы/бюджет/инвестиции",
        category: Category::Life,
        principle: "生活 Жизнь — деньги = ресурс. Без контроля финансов система нестабильна.",
    },
    RuleDescriptor {
        id: RuleId::LifeNoSkills,
        wire_id: "life-no-skills",
        name: "Нет навыков/обучения",
        description: "В системе нет блока про обучение/развитие/навыки",
        category: Category::Life,
        principle: "生活 Жизнь — без развития = деградация. Навыки = усилитель всех процессов.",
    },
    RuleDescriptor {
        id: RuleId::LifeNoRest,
        wire_id: "life-no-rest",
        name: "Нет отдыха/восстановления",
        description: "В системе нет блока про отдых, сон, восстановление",
        category: Category::Life,
        principle: "生活 Жизнь — система без отдыха = выгорание. Восстановление это не потеря, а инвестиция.",
    },
    RuleDescriptor {
        id: RuleId::LifeNoRoutine,
        wire_id: "life-no-routine",
        name: "Нет рутины/привычек",
        description: "Нет алгоритмизированного распорядка дня",
        category: Category::Life,
        principle: "生活 Жизнь — без привычек = хаос. Рутина = автоматизация жизненных процессов.",
    },
    RuleDescriptor {
        id: RuleId::LifeNoGoals,
        wire_id: "life-no-goals",
        name: "Нет целей в блоках",
        description: "Блоки без описания/целей — непонятно зачем они существуют",
        category: Category::Life,
        principle: "生活 — процесс без цели = бессмысленное движение.",
    },
    RuleDescriptor {
        id: RuleId::LifeUnbalanced,
        wire_id: "life-unbalanced",
        name: "Дисбаланс жизни",
        description: "Слишком много блоков в одной сфере, ноль в другой",
        category: Category::Life,
        principle: "生活 — перекос в одну сферу разрушает остальные. Баланс = устойчивость.",
    },
    RuleDescriptor {
        id: RuleId::LifeComplete,
        wire_id: "life-complete",
        name: "Жизнь алгоритмизирована",
        description: "Все ключевые сферы жизни представлены в системе",
        category: Category::Life,
        principle: "生活 — полная жизненная система.",
    },
];
