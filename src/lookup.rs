// Copyright 2025 Nimbic

//! Таблицы соответствий id -> имя.
//!
//! Консоль получает списки пользователей, групп, кластеров и зон от
//! внешнего API в виде пар `{ID, NAME}`. Таблицы передаются в кодек
//! явным параметром: никакого глобального состояния, пустая таблица
//! означает «имена не разрешать».

use serde::{Deserialize, Serialize};

use crate::acl::{Identifier, IdentifierScope, IdentifierType};

/// Одна запись пула: идентификатор и отображаемое имя.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "NAME")]
    pub name: String,
}

impl LookupEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        LookupEntry {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Снимки пулов для разрешения имён. Все списки по умолчанию пусты.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookups {
    #[serde(default)]
    pub users: Vec<LookupEntry>,
    #[serde(default)]
    pub groups: Vec<LookupEntry>,
    #[serde(default)]
    pub clusters: Vec<LookupEntry>,
    #[serde(default)]
    pub zones: Vec<LookupEntry>,
}

impl Lookups {
    /// Ищет имя для идентификатора с учётом его позиции в правиле.
    ///
    /// Идентификатор зоны разрешается по пулу зон; остальные — по
    /// типу: `Individual` по пользователям, `Group` по группам,
    /// `Cluster` по кластерам. Точное строковое совпадение `ID`,
    /// промах — не ошибка.
    pub fn resolve(&self, identifier: &Identifier, scope: IdentifierScope) -> Option<&str> {
        let id = identifier.id.as_deref()?;
        let pool = match scope {
            IdentifierScope::Zone => &self.zones,
            _ => match identifier.kind {
                IdentifierType::Individual => &self.users,
                IdentifierType::Group => &self.groups,
                IdentifierType::Cluster => &self.clusters,
                IdentifierType::All => return None,
            },
        };
        pool.iter().find(|e| e.id == id).map(|e| e.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookups() -> Lookups {
        Lookups {
            users: vec![LookupEntry::new("3", "bob")],
            groups: vec![LookupEntry::new("12", "ops")],
            clusters: vec![LookupEntry::new("7", "c7")],
            zones: vec![LookupEntry::new("1", "z1")],
        }
    }

    /// Тест проверяет выбор пула по типу идентификатора.
    #[test]
    fn resolves_by_identifier_type() {
        let l = lookups();
        assert_eq!(
            l.resolve(&Identifier::individual("3"), IdentifierScope::User),
            Some("bob")
        );
        assert_eq!(
            l.resolve(&Identifier::group("12"), IdentifierScope::Resource),
            Some("ops")
        );
        assert_eq!(
            l.resolve(&Identifier::cluster("7"), IdentifierScope::Resource),
            Some("c7")
        );
    }

    /// Тест проверяет, что зона разрешается по пулу зон, а не по
    /// пользователям.
    #[test]
    fn zone_uses_zone_pool() {
        let l = lookups();
        assert_eq!(
            l.resolve(&Identifier::individual("1"), IdentifierScope::Zone),
            Some("z1")
        );
        assert_eq!(
            l.resolve(&Identifier::individual("3"), IdentifierScope::Zone),
            None
        );
    }

    /// Тест проверяет молчаливый промах: пустые пулы и `*`.
    #[test]
    fn misses_are_silent() {
        let l = Lookups::default();
        assert_eq!(
            l.resolve(&Identifier::individual("3"), IdentifierScope::User),
            None
        );
        assert_eq!(
            lookups().resolve(&Identifier::all(), IdentifierScope::User),
            None
        );
    }

    /// Тест проверяет десериализацию пула в форме `{ID, NAME}`.
    #[test]
    fn deserializes_api_shape() {
        let l: Lookups = serde_json::from_str(
            r#"{"users":[{"ID":"5","NAME":"alice"}],"zones":[{"ID":"0","NAME":"main"}]}"#,
        )
        .unwrap();
        assert_eq!(l.users[0], LookupEntry::new("5", "alice"));
        assert!(l.groups.is_empty());
    }
}
