use super::AggregateId;

/// Трейт для корня агрегата
///
/// Хранилище ищет записи по `id()`, имена используются в логах и сообщениях
/// об ошибках.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Имя коллекции в API (например, "machines")
    fn collection_name() -> &'static str;

    /// Имя элемента (единственное число), используется в сообщениях об ошибках
    fn element_name() -> &'static str;
}
