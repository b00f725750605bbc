//! Built-in Russian given names.

/// Male given names.
pub const MALE_NAMES: &[&str] = &[
    "Александр", "Алексей", "Анатолий", "Андрей", "Антон", "Аркадий", "Артём",
    "Борис", "Вадим", "Валентин", "Валерий", "Василий", "Виктор", "Виталий",
    "Владимир", "Владислав", "Всеволод", "Вячеслав", "Геннадий", "Георгий",
    "Глеб", "Григорий", "Даниил", "Денис", "Дмитрий", "Евгений", "Егор",
    "Иван", "Игорь", "Илья", "Кирилл", "Константин", "Лев", "Леонид",
    "Максим", "Марк", "Матвей", "Михаил", "Никита", "Николай", "Олег",
    "Павел", "Пётр", "Роман", "Руслан", "Семён", "Сергей", "Станислав",
    "Степан", "Тимофей", "Тимур", "Фёдор", "Филипп", "Юрий", "Ярослав",
];

/// Female given names.
pub const FEMALE_NAMES: &[&str] = &[
    "Алёна", "Алина", "Алиса", "Алла", "Анастасия", "Ангелина", "Анна",
    "Арина", "Валентина", "Валерия", "Вера", "Вероника", "Виктория",
    "Галина", "Дарья", "Диана", "Ева", "Евгения", "Екатерина", "Елена",
    "Елизавета", "Жанна", "Зинаида", "Зоя", "Инна", "Ирина", "Карина",
    "Кира", "Ксения", "Лариса", "Лидия", "Любовь", "Людмила", "Маргарита",
    "Марина", "Мария", "Милана", "Надежда", "Наталья", "Нина", "Оксана",
    "Ольга", "Полина", "Раиса", "Светлана", "София", "Таисия", "Тамара",
    "Татьяна", "Ульяна", "Юлия", "Яна",
];
