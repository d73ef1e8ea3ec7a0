//! The kaizen analyzer: a single synchronous scan of the whole graph
//! against the rule catalog, producing a finding list.

use super::catalog::RuleId;
use super::domains::{BUSINESS_KEYWORDS, LIFE_AREAS};
use super::finding::{Finding, Severity};
use super::prompt;
use crate::fmt::fmt_num;
use crate::graph::{Edge, Node, NodeCategory, NodeStatus};
use crate::topology;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

/// Builds a finding skeleton from the catalog entry for `rule_id`.
/// Emit sites override node ids, suggestion, prompt and (for pass
/// findings) the principle via struct update.
fn emit(rule_id: RuleId, rule_name: &str, severity: Severity, message: String) -> Finding {
    let descriptor = rule_id.descriptor();
    Finding {
        rule_id,
        rule_name: rule_name.to_string(),
        category: descriptor.category,
        severity,
        message,
        node_ids: Vec::new(),
        suggestion: None,
        principle: descriptor.principle.to_string(),
        prompt: None,
    }
}

fn is_blank(text: Option<&str>) -> bool {
    text.unwrap_or("").is_empty()
}

/// Runs every rule of the catalog over the graph and returns the findings,
/// in rule-catalog order with pass findings appended last.
///
/// Pure: two calls with structurally equal input produce identical lists,
/// and the input is never mutated.
pub fn analyze(nodes: &[Node], edges: &[Edge]) -> Vec<Finding> {
    let mut results: Vec<Finding> = Vec::new();

    // An empty schema means no progress at all: three fixed criticals,
    // nothing else to evaluate.
    if nodes.is_empty() {
        results.push(Finding {
            suggestion: Some("Добавь цели, процессы и потоки. Без них нечего улучшать.".into()),
            ..emit(
                RuleId::GembaEmpty,
                "Схема пустая",
                Severity::Critical,
                "Нет ни одного блока — нет прогресса, нет развития".into(),
            )
        });
        results.push(Finding {
            suggestion: Some(
                "Создай цепочку: Вход → Процесс → Выход. Это основа любой системы.".into(),
            ),
            ..emit(
                RuleId::FlowNoValue,
                "Нет потока ценности",
                Severity::Critical,
                "Поток создания ценности отсутствует — система не работает".into(),
            )
        });
        results.push(Finding {
            suggestion: Some("Определи цели и процессы. Plan → Do → Check → Act.".into()),
            ..emit(
                RuleId::PdcaNoPlan,
                "Нет плана (Plan)",
                Severity::Critical,
                "Первый шаг PDCA — планирование — не выполнен".into(),
            )
        });
        prompt::fill_prompts(&mut results, nodes);
        return results;
    }

    // One or two blocks: the picture is too coarse to be useful.
    if nodes.len() <= 2 {
        results.push(Finding {
            suggestion: Some(
                "Добавь больше процессов: откуда приходят ресурсы? Куда идёт результат?".into(),
            ),
            ..emit(
                RuleId::GembaUnderdeveloped,
                "Схема недоразвита",
                Severity::Warning,
                format!("Всего {} блоков — система слишком простая", nodes.len()),
            )
        });
    }

    // Blocks exist but nothing is wired together.
    if edges.is_empty() {
        results.push(Finding {
            suggestion: Some("Соедини блоки: кто кому передаёт данные/ресурсы?".into()),
            ..emit(
                RuleId::FlowNoConnections,
                "Нет связей",
                Severity::Critical,
                "Блоки есть, но ни один не связан — процессы не работают вместе".into(),
            )
        });
    }

    // --- Muda: waiting (process with no inputs) ---
    for node in nodes {
        if node.category == NodeCategory::Process
            && topology::incoming_edges(&node.id, edges).is_empty()
        {
            results.push(Finding {
                node_ids: vec![node.id.clone()],
                suggestion: Some(
                    "Подключи вход: откуда приходят данные/клиенты для этого процесса?".into(),
                ),
                ..emit(
                    RuleId::MudaWaiting,
                    "Потери ожидания",
                    Severity::Warning,
                    format!("«{}» — процесс без входящих данных, простаивает", node.label),
                )
            });
        }
    }

    // --- Muda: dead end (process with no outputs) ---
    for node in nodes {
        if node.category == NodeCategory::Process
            && topology::outgoing_edges(&node.id, edges).is_empty()
        {
            results.push(Finding {
                node_ids: vec![node.id.clone()],
                suggestion: Some("Добавь выход: куда идёт результат этого процесса?".into()),
                ..emit(
                    RuleId::MudaDeadend,
                    "Тупик",
                    Severity::Warning,
                    format!("«{}» — результат никуда не идёт", node.label),
                )
            });
        }
    }

    // --- Muda: defects (bottleneck nodes), one aggregate finding ---
    let bottleneck_nodes: Vec<&Node> = nodes
        .iter()
        .filter(|n| n.status == NodeStatus::Bottleneck)
        .collect();
    if !bottleneck_nodes.is_empty() {
        results.push(Finding {
            node_ids: bottleneck_nodes.iter().map(|n| n.id.clone()).collect(),
            suggestion: Some(
                "Исправь сначала критические проблемы — они тормозят всю систему".into(),
            ),
            ..emit(
                RuleId::MudaDefects,
                "Дефекты в системе",
                Severity::Critical,
                format!(
                    "{} процессов сломано: {}",
                    bottleneck_nodes.len(),
                    bottleneck_nodes.iter().map(|n| n.label.as_str()).join(", ")
                ),
            )
        });
    }

    // --- Muda: inventory (large inflow, small outflow) ---
    for node in nodes {
        let in_vol = topology::in_volume(&node.id, edges);
        let out_vol = topology::out_volume(&node.id, edges);
        if in_vol > 0.0 && out_vol > 0.0 && in_vol > out_vol * 2.5 {
            results.push(Finding {
                node_ids: vec![node.id.clone()],
                suggestion: Some(
                    "Увеличь пропускную способность или уменьши входящий поток".into(),
                ),
                ..emit(
                    RuleId::MudaInventory,
                    "Копятся запасы",
                    Severity::Warning,
                    format!(
                        "«{}» — вход {} vs выход {}, копятся необработанные запасы",
                        node.label,
                        fmt_num(in_vol),
                        fmt_num(out_vol)
                    ),
                )
            });
        }
    }

    // --- Muda: motion (a node wired to 5+ others) ---
    for node in nodes {
        let connections = topology::incoming_edges(&node.id, edges).len()
            + topology::outgoing_edges(&node.id, edges).len();
        if connections >= 5 {
            results.push(Finding {
                node_ids: vec![node.id.clone()],
                suggestion: Some("Раздели на несколько специализированных процессов".into()),
                ..emit(
                    RuleId::MudaMotion,
                    "Слишком много связей",
                    Severity::Suggestion,
                    format!(
                        "«{}» — {} связей, много переключений контекста",
                        node.label, connections
                    ),
                )
            });
        }
    }

    // --- 5S: sort (inactive nodes clutter the schema) ---
    let inactive_nodes: Vec<&Node> = nodes
        .iter()
        .filter(|n| n.status == NodeStatus::Inactive)
        .collect();
    if !inactive_nodes.is_empty() {
        results.push(Finding {
            node_ids: inactive_nodes.iter().map(|n| n.id.clone()).collect(),
            suggestion: Some("Удали неактивные блоки или активируй их".into()),
            ..emit(
                RuleId::FiveSSort,
                "整理 Убери лишнее",
                Severity::Suggestion,
                format!("{} выключенных блоков занимают место", inactive_nodes.len()),
            )
        });
    }

    // --- 5S: standardize (duplicate labels, case-insensitive) ---
    let mut label_groups: Vec<(String, Vec<String>)> = Vec::new();
    let mut label_index: AHashMap<String, usize> = AHashMap::new();
    for node in nodes {
        let label = node.label.to_lowercase();
        match label_index.get(&label) {
            Some(&i) => label_groups[i].1.push(node.id.clone()),
            None => {
                label_index.insert(label.clone(), label_groups.len());
                label_groups.push((label, vec![node.id.clone()]));
            }
        }
    }
    for (label, ids) in &label_groups {
        if ids.len() > 1 {
            results.push(Finding {
                node_ids: ids.clone(),
                suggestion: Some("Объедини дубли или дай уникальные имена".into()),
                ..emit(
                    RuleId::FiveSStandardize,
                    "清潔 Дубли",
                    Severity::Suggestion,
                    format!(
                        "«{}» встречается {} раз — возможно дублирование",
                        label,
                        ids.len()
                    ),
                )
            });
        }
    }

    // --- PDCA: no metrics on processes ---
    let no_metrics: Vec<&Node> = nodes
        .iter()
        .filter(|n| n.category == NodeCategory::Process && n.metrics.is_none())
        .collect();
    if !no_metrics.is_empty() && nodes.len() > 3 {
        results.push(Finding {
            node_ids: no_metrics.iter().map(|n| n.id.clone()).collect(),
            suggestion: Some("Добавь KPI: лиды/день, конверсию, время обработки".into()),
            ..emit(
                RuleId::PdcaNoMetrics,
                "Нет метрик",
                Severity::Suggestion,
                format!("{} процессов без метрик — нечего измерять", no_metrics.len()),
            )
        });
    }

    // --- PDCA: no feedback loop ---
    // List position stands in for topological order: an edge whose target
    // precedes its source in the node list counts as feedback. A weak proxy,
    // kept deliberately.
    let index_of = |id: &str| {
        nodes
            .iter()
            .position(|n| n.id == id)
            .map(|i| i as isize)
            .unwrap_or(-1)
    };
    let has_back_edge = edges
        .iter()
        .any(|e| index_of(&e.source) > index_of(&e.target));
    if !has_back_edge && nodes.len() > 3 {
        results.push(Finding {
            suggestion: Some("Добавь обратную связь: кейс → маркетинг, отзыв → улучшение".into()),
            ..emit(
                RuleId::PdcaNoFeedback,
                "Нет обратной связи",
                Severity::Warning,
                "Линейная цепочка без обратных связей — нет цикла улучшений".into(),
            )
        });
    }

    // --- Jidoka: a bottleneck whose downstream keeps running ---
    for bn in &bottleneck_nodes {
        let downstream = topology::outgoing_edges(&bn.id, edges);
        let downstream_active = downstream.iter().any(|e| {
            nodes
                .iter()
                .find(|n| n.id == e.target)
                .is_some_and(|target| target.status == NodeStatus::Active)
        });
        if !downstream.is_empty() && downstream_active {
            results.push(Finding {
                node_ids: vec![bn.id.clone()],
                suggestion: Some("Останови зависимые процессы или исправь проблему".into()),
                ..emit(
                    RuleId::JidokaNoStop,
                    "Нет остановки при дефекте",
                    Severity::Critical,
                    format!(
                        "«{}» сломан, но процессы после него работают — дефект передаётся дальше",
                        bn.label
                    ),
                )
            });
        }
    }

    // --- JIT: input overload ---
    for node in nodes {
        let incoming = topology::incoming_edges(&node.id, edges).len();
        if incoming >= 4 {
            results.push(Finding {
                node_ids: vec![node.id.clone()],
                suggestion: Some("Добавь промежуточный буфер или раздели процесс".into()),
                ..emit(
                    RuleId::JitOverload,
                    "Перегрузка входа",
                    Severity::Warning,
                    format!("«{}» — {} входящих потоков, перегрузка", node.label, incoming),
                )
            });
        }
    }

    // --- Flow: isolated nodes, one aggregate finding ---
    let isolated: Vec<&Node> = nodes
        .iter()
        .filter(|n| topology::is_isolated(&n.id, edges))
        .collect();
    if !isolated.is_empty() {
        results.push(Finding {
            node_ids: isolated.iter().map(|n| n.id.clone()).collect(),
            suggestion: Some("Подключи к потоку или удали если не нужны".into()),
            ..emit(
                RuleId::FlowIsolated,
                "Изолированные узлы",
                Severity::Warning,
                format!(
                    "{} узлов не подключены: {}",
                    isolated.len(),
                    isolated.iter().map(|n| n.label.as_str()).join(", ")
                ),
            )
        });
    }

    // --- Flow: single point of failure ---
    for node in nodes {
        let incoming = topology::incoming_edges(&node.id, edges).len();
        let outgoing = topology::outgoing_edges(&node.id, edges).len();
        if incoming >= 3 && outgoing >= 3 {
            results.push(Finding {
                node_ids: vec![node.id.clone()],
                suggestion: Some("Распредели нагрузку — создай параллельные пути".into()),
                ..emit(
                    RuleId::FlowBalance,
                    "Точка отказа",
                    Severity::Warning,
                    format!(
                        "«{}» — всё проходит через один узел. Если сломается — встанет вся система",
                        node.label
                    ),
                )
            });
        }
    }

    // --- Life: domain coverage over all labels + descriptions ---
    let all_text = nodes
        .iter()
        .map(|n| n.label.to_lowercase())
        .chain(
            nodes
                .iter()
                .map(|n| n.description.as_deref().unwrap_or("").to_lowercase()),
        )
        .join(" ");

    let missing_areas: Vec<_> = LIFE_AREAS
        .iter()
        .filter(|area| !area.keywords.iter().any(|kw| all_text.contains(kw)))
        .collect();

    for area in &missing_areas {
        results.push(Finding {
            severity: if area.id == "health" || area.id == "relationships" {
                Severity::Critical
            } else {
                Severity::Warning
            },
            suggestion: Some(format!("Создай контейнер «{}» и опиши процессы внутри", area.name)),
            prompt: Some(format!(
                "Добавь в мою мастер-схему Life Factory новый контейнер \"{}\". Создай внутри него \
                 базовые процессы и связи. Это сфера жизни которая сейчас не алгоритмизирована — \
                 нужно добавить блоки, описать потоки и связать с остальной системой.",
                area.name
            )),
            ..emit(
                area.rule_id,
                &format!("Нет: {}", area.name),
                Severity::Warning,
                format!(
                    "{} В твоей системе нет ничего про {}. Жизнь не алгоритмизирована полностью.",
                    area.emoji,
                    area.name.to_lowercase()
                ),
            )
        });
    }

    // Every domain represented: record the pass.
    if missing_areas.is_empty() {
        results.push(emit(
            RuleId::LifeComplete,
            "Жизнь алгоритмизирована",
            Severity::Pass,
            "Все ключевые сферы жизни представлены в системе".into(),
        ));
    }

    // --- Life: business-heavy imbalance ---
    let business_count = nodes
        .iter()
        .filter(|n| {
            let label = n.label.to_lowercase();
            BUSINESS_KEYWORDS.iter().any(|kw| label.contains(kw))
        })
        .count();
    if business_count >= 3 && missing_areas.len() >= 3 {
        results.push(Finding {
            suggestion: Some("Добавь блоки для здоровья, отношений, навыков, отдыха".into()),
            prompt: Some(format!(
                "Моя Life Factory перекошена в бизнес ({} блоков), но отсутствуют: {}. \
                 Сбалансируй мою жизненную систему — добавь контейнеры для недостающих сфер \
                 жизни и свяжи их с бизнесом.",
                business_count,
                missing_areas.iter().map(|a| a.name).join(", ")
            )),
            ..emit(
                RuleId::LifeUnbalanced,
                "Дисбаланс жизни",
                Severity::Critical,
                format!(
                    "{} блоков про бизнес, но {} сфер жизни отсутствуют. Перекос = выгорание.",
                    business_count,
                    missing_areas.len()
                ),
            )
        });
    }

    // --- Life: blocks without a stated goal ---
    let no_description: Vec<&Node> = nodes
        .iter()
        .filter(|n| n.category != NodeCategory::SchemaRef && is_blank(n.description.as_deref()))
        .collect();
    if no_description.len() >= 2 {
        let listed = no_description
            .iter()
            .take(3)
            .map(|n| n.label.as_str())
            .join(", ");
        let ellipsis = if no_description.len() > 3 { "..." } else { "" };
        results.push(Finding {
            node_ids: no_description.iter().map(|n| n.id.clone()).collect(),
            suggestion: Some(
                "Добавь описание и цель каждому блоку — зачем он существует?".into(),
            ),
            prompt: Some(format!(
                "В моей схеме {} блоков без описания и целей: {}. Добавь каждому блоку \
                 осмысленное описание и конкретную цель — зачем этот процесс существует и что \
                 должен давать.",
                no_description.len(),
                no_description.iter().map(|n| n.label.as_str()).join(", ")
            )),
            ..emit(
                RuleId::LifeNoGoals,
                "Нет целей в блоках",
                Severity::Warning,
                format!(
                    "{} блоков без описания/целей: {}{}",
                    no_description.len(),
                    listed,
                    ellipsis
                ),
            )
        });
    }

    // Generated prompts for everything without a rule-specific one.
    prompt::fill_prompts(&mut results, nodes);

    // --- Passed checks, appended last ---
    let failed_ids: AHashSet<RuleId> = results.iter().map(|r| r.rule_id).collect();
    if !failed_ids.contains(&RuleId::MudaDefects) {
        results.push(Finding {
            principle: "無駄 Muda — ноль дефектов в системе.".into(),
            ..emit(
                RuleId::MudaDefects,
                "Нет дефектов",
                Severity::Pass,
                "Все процессы работают без ошибок".into(),
            )
        });
    }
    if has_back_edge {
        results.push(Finding {
            principle: "PDCA — цикл замкнут, есть механизм улучшений.".into(),
            ..emit(
                RuleId::PdcaNoFeedback,
                "Есть обратная связь",
                Severity::Pass,
                "Цикл обратной связи присутствует".into(),
            )
        });
    }
    if isolated.is_empty() {
        results.push(Finding {
            principle: "Поток ценности — каждый элемент вносит вклад.".into(),
            ..emit(
                RuleId::FlowIsolated,
                "Все узлы подключены",
                Severity::Pass,
                "Все элементы являются частью потока ценности".into(),
            )
        });
    }

    results
}
