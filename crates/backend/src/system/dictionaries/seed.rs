//! Встроенные справочники, которыми заполняется пустая база.

use contracts::shared::dictionary::DictionaryEntry;

pub struct BuiltinDictionary {
    pub code: &'static str,
    pub name: &'static str,
    pub entries: Vec<DictionaryEntry>,
}

fn flat(pairs: &[(&str, &str)]) -> Vec<DictionaryEntry> {
    pairs
        .iter()
        .map(|(value, label)| DictionaryEntry::new(*value, *label))
        .collect()
}

pub fn builtin_dictionaries() -> Vec<BuiltinDictionary> {
    vec![
        BuiltinDictionary {
            code: "yes_no",
            name: "Да / Нет",
            entries: flat(&[("1", "Да"), ("0", "Нет")]),
        },
        BuiltinDictionary {
            code: "project_category",
            name: "Категория проекта",
            entries: flat(&[
                ("basic", "Фундаментальное исследование"),
                ("applied", "Прикладное исследование"),
                ("clinical", "Клиническое исследование"),
                ("educational", "Образовательный проект"),
            ]),
        },
        BuiltinDictionary {
            code: "achievement_type",
            name: "Тип достижения",
            entries: flat(&[
                ("award", "Премия"),
                ("patent", "Патент"),
                ("publication", "Публикация"),
                ("grant", "Грант"),
            ]),
        },
        BuiltinDictionary {
            code: "ethics_review_status",
            name: "Статус этической экспертизы",
            entries: vec![
                DictionaryEntry::new("draft", "Черновик").with_color("#757575"),
                DictionaryEntry::new("submitted", "На рассмотрении").with_color("#1565c0"),
                DictionaryEntry::new("approved", "Одобрено"),
                DictionaryEntry::new("revision", "На доработке").with_color("#ef6c00"),
                DictionaryEntry::new("rejected", "Отклонено"),
            ],
        },
        BuiltinDictionary {
            code: "research_direction",
            name: "Направление исследования",
            entries: flat(&[
                ("oncology", "Онкология"),
                ("neuro", "Нейронауки"),
                ("genetics", "Генетика"),
                ("ai", "Искусственный интеллект"),
                ("materials", "Материаловедение"),
            ]),
        },
        BuiltinDictionary {
            code: "discipline",
            name: "Научная дисциплина",
            entries: vec![
                DictionaryEntry::new("nat", "Естественные науки"),
                DictionaryEntry::new("phys", "Физика").with_parent("nat"),
                DictionaryEntry::new("optics", "Оптика").with_parent("phys"),
                DictionaryEntry::new("nuclear", "Ядерная физика").with_parent("phys"),
                DictionaryEntry::new("chem", "Химия").with_parent("nat"),
                DictionaryEntry::new("bio", "Биология").with_parent("nat"),
                DictionaryEntry::new("med", "Медицинские науки"),
                DictionaryEntry::new("clin_med", "Клиническая медицина").with_parent("med"),
                DictionaryEntry::new("pharm", "Фармакология").with_parent("med"),
                DictionaryEntry::new("hum", "Гуманитарные науки"),
                DictionaryEntry::new("hist", "История").with_parent("hum"),
                DictionaryEntry::new("phil", "Философия").with_parent("hum"),
            ],
        },
        BuiltinDictionary {
            code: "animal_species",
            name: "Вид лабораторных животных",
            entries: flat(&[
                ("mouse", "Мышь"),
                ("rat", "Крыса"),
                ("rabbit", "Кролик"),
                ("zebrafish", "Данио-рерио"),
            ]),
        },
        BuiltinDictionary {
            code: "equipment_type",
            name: "Тип оборудования",
            entries: vec![
                DictionaryEntry::new("microscopy", "Микроскопия"),
                DictionaryEntry::new("confocal", "Конфокальный микроскоп").with_parent("microscopy"),
                DictionaryEntry::new("electron", "Электронный микроскоп").with_parent("microscopy"),
                DictionaryEntry::new("analytics", "Аналитическое оборудование"),
                DictionaryEntry::new("sequencer", "Секвенатор").with_parent("analytics"),
                DictionaryEntry::new("mass_spec", "Масс-спектрометр").with_parent("analytics"),
            ],
        },
        BuiltinDictionary {
            code: "funding_source",
            name: "Источник финансирования",
            entries: flat(&[
                ("budget", "Бюджет"),
                ("grant", "Грант"),
                ("contract", "Хоздоговор"),
                ("own", "Собственные средства"),
            ]),
        },
    ]
}
