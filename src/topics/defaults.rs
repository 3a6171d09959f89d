// Built-in fallback vocabularies, used when a topic's dictionary resource is
// missing or unreadable. Roots only, no phrases.

use super::topic::Topic;

/// Hand-curated root list for `topic`. Never empty.
pub fn default_roots(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Medicine => &[
            "врач", "болезн", "лечен", "пациент", "диагноз", "симптом", "терап", "хирург",
            "анализ", "рецепт", "медикамент", "госпитал",
        ],
        Topic::History => &[
            "истор", "век", "эпох", "войн", "импер", "государств", "революц", "древн",
            "цивилизац", "археолог",
        ],
        Topic::Programming => &[
            "код", "программ", "алгоритм", "функц", "класс", "метод", "переменн", "цикл",
            "массив", "компилятор", "отладк",
        ],
        Topic::Networks => &[
            "сет", "протокол", "сервер", "клиент", "маршрутизац", "ip", "tcp", "dns",
            "firewall", "пакет",
        ],
        Topic::Cryptography => &[
            "шифр", "ключ", "дешифр", "криптограф", "хеш", "блокчейн", "алгоритм", "rsa",
            "aes", "подпис",
        ],
        Topic::Finance => &[
            "финанс", "банк", "кредит", "инвестиц", "акц", "бирж", "капитал", "процент",
            "депозит", "валют",
        ],
    }
}
