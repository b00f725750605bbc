//! Built-in quotes as `(text, author)` pairs.

/// Quotes used by the quote generator.
pub const QUOTES: &[(&str, &str)] = &[
    ("Все счастливые семьи похожи друг на друга, каждая несчастливая семья несчастлива по-своему.", "Лев Толстой"),
    ("Красота спасёт мир.", "Фёдор Достоевский"),
    ("Краткость — сестра таланта.", "Антон Чехов"),
    ("В человеке должно быть всё прекрасно: и лицо, и одежда, и душа, и мысли.", "Антон Чехов"),
    ("Рукописи не горят.", "Михаил Булгаков"),
    ("Никогда и ничего не просите! Никогда и ничего, и в особенности у тех, кто сильнее вас.", "Михаил Булгаков"),
    ("Чем меньше женщину мы любим, тем легче нравимся мы ей.", "Александр Пушкин"),
    ("Привычка свыше нам дана: замена счастию она.", "Александр Пушкин"),
    ("Умом Россию не понять, аршином общим не измерить.", "Фёдор Тютчев"),
    ("Служить бы рад, прислуживаться тошно.", "Александр Грибоедов"),
    ("Счастливые часов не наблюдают.", "Александр Грибоедов"),
    ("Человек — это звучит гордо!", "Максим Горький"),
    ("Мы в ответе за тех, кого приручили.", "Антуан де Сент-Экзюпери"),
    ("Зорко одно лишь сердце. Самого главного глазами не увидишь.", "Антуан де Сент-Экзюпери"),
    ("Я мыслю, следовательно, существую.", "Рене Декарт"),
    ("Знание — сила.", "Фрэнсис Бэкон"),
    ("Всё течёт, всё меняется.", "Гераклит"),
    ("Я знаю, что ничего не знаю.", "Сократ"),
    ("Быть или не быть — вот в чём вопрос.", "Уильям Шекспир"),
    ("Воображение важнее знания.", "Альберт Эйнштейн"),
    ("Дорогу осилит идущий.", "Народная мудрость"),
    ("Терпение и труд всё перетрут.", "Народная мудрость"),
];
