//! Built-in Russian common nouns.

/// Common nouns used by the word generator.
pub const WORDS: &[&str] = &[
    "абрикос", "автобус", "адрес", "айсберг", "акварель", "альбом", "апельсин",
    "багаж", "бадминтон", "балкон", "берег", "библиотека", "билет", "буква",
    "ваза", "вагон", "ветер", "вечер", "вокзал", "волна", "воробей", "время",
    "гавань", "газета", "гитара", "глобус", "гора", "город", "гроза",
    "дверь", "дерево", "дождь", "дорога", "дракон", "дружба",
    "ёж", "ёлка", "жираф", "журнал", "завтрак", "замок", "звезда", "зеркало",
    "зима", "игрушка", "истина", "календарь", "камень", "карандаш", "картина",
    "ключ", "книга", "комета", "корабль", "кот", "лампа", "лес", "лестница",
    "лимон", "луна", "магнит", "маяк", "мельница", "мечта", "море", "мост",
    "небо", "облако", "огонь", "окно", "остров", "палитра", "парус", "перо",
    "письмо", "планета", "подарок", "поезд", "поле", "радуга", "река",
    "ромашка", "сад", "самолёт", "сказка", "снег", "солнце", "сова", "стол",
    "тетрадь", "тишина", "туман", "улица", "утро", "фонарь", "хлеб", "цветок",
    "часы", "чайник", "шар", "шахматы", "щенок", "эхо", "юла", "яблоко", "якорь",
];
