// Copyright 2025 Nimbic

//! Идентификаторы субъектов и областей ACL-правила.
//!
//! В текстовой форме правила каждый идентификатор кодируется
//! префиксным символом (`#`, `@`, `*`, `%`) и, при необходимости,
//! числовым id. Вместо позиционного разбора символов тип
//! идентификатора представлен явным перечислением с двусторонним
//! отображением на префикс.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AclError, AclResult};

/// Тип идентификатора: кому или чему адресовано правило.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierType {
    /// Конкретный пользователь или ресурс (`#id`).
    Individual,
    /// Группа (`@id`).
    Group,
    /// Все без ограничения (`*`).
    All,
    /// Кластер, допустим только в области ресурсов (`%id`).
    Cluster,
}

impl IdentifierType {
    /// Префиксный символ текстовой формы.
    pub const fn prefix(self) -> char {
        match self {
            IdentifierType::Individual => '#',
            IdentifierType::Group => '@',
            IdentifierType::All => '*',
            IdentifierType::Cluster => '%',
        }
    }

    /// Обратное отображение префикса в тип.
    pub const fn from_prefix(c: char) -> Option<Self> {
        match c {
            '#' => Some(IdentifierType::Individual),
            '@' => Some(IdentifierType::Group),
            '*' => Some(IdentifierType::All),
            '%' => Some(IdentifierType::Cluster),
            _ => None,
        }
    }

    /// `Individual`, `Group` и `Cluster` обязаны нести числовой id,
    /// `All` — никогда.
    pub const fn requires_id(self) -> bool {
        !matches!(self, IdentifierType::All)
    }
}

/// Позиция идентификатора внутри правила. Каждая позиция допускает
/// своё подмножество типов.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierScope {
    User,
    Resource,
    Zone,
}

impl IdentifierScope {
    /// Допустим ли тип идентификатора в данной позиции.
    pub const fn admits(self, kind: IdentifierType) -> bool {
        match self {
            IdentifierScope::User => !matches!(kind, IdentifierType::Cluster),
            IdentifierScope::Resource => true,
            IdentifierScope::Zone => {
                matches!(kind, IdentifierType::Individual | IdentifierType::All)
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            IdentifierScope::User => "user",
            IdentifierScope::Resource => "resource",
            IdentifierScope::Zone => "zone",
        }
    }
}

/// Идентификатор с опциональным отображаемым именем.
///
/// `id` — строка из ASCII-цифр, присутствует ровно тогда, когда того
/// требует тип. `name` — аннотация, разрешаемая по таблицам
/// соответствий; в каноническую текстовую форму не входит.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub kind: IdentifierType,
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Identifier {
    pub fn individual(id: impl Into<String>) -> Self {
        Identifier {
            kind: IdentifierType::Individual,
            id: Some(id.into()),
            name: None,
        }
    }

    pub fn group(id: impl Into<String>) -> Self {
        Identifier {
            kind: IdentifierType::Group,
            id: Some(id.into()),
            name: None,
        }
    }

    pub fn cluster(id: impl Into<String>) -> Self {
        Identifier {
            kind: IdentifierType::Cluster,
            id: Some(id.into()),
            name: None,
        }
    }

    pub fn all() -> Self {
        Identifier {
            kind: IdentifierType::All,
            id: None,
            name: None,
        }
    }

    /// Прикрепляет отображаемое имя; на каноническую форму не влияет.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Разбирает один токен идентификатора с учётом позиции.
    ///
    /// Токен обязан состоять из известного префикса и, для типов с id,
    /// непустой последовательности цифр. Любое отклонение — ошибка.
    pub fn parse(token: &str, scope: IdentifierScope) -> AclResult<Self> {
        let mut chars = token.chars();
        let prefix = chars.next().ok_or_else(|| {
            AclError::InvalidRuleFormat(format!("empty {} identifier", scope.label()))
        })?;

        let kind = IdentifierType::from_prefix(prefix)
            .ok_or(AclError::UnknownIdentifierPrefix(prefix))?;

        if !scope.admits(kind) {
            return Err(AclError::InvalidRuleFormat(format!(
                "identifier `{token}` is not allowed in {} position",
                scope.label()
            )));
        }

        let rest = &token[prefix.len_utf8()..];
        if kind.requires_id() {
            if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AclError::InvalidId(token.to_string()));
            }
            Ok(Identifier {
                kind,
                id: Some(rest.to_string()),
                name: None,
            })
        } else {
            // `*` кодируется одиночным символом, хвост недопустим.
            if !rest.is_empty() {
                return Err(AclError::InvalidRuleFormat(format!(
                    "unexpected trailing characters in `{token}`"
                )));
            }
            Ok(Identifier::all())
        }
    }

    /// Проверяет согласованность типа и наличия id; используется
    /// структурным конструктором правила.
    pub(crate) fn check(&self, scope: IdentifierScope) -> AclResult<()> {
        if !scope.admits(self.kind) {
            return Err(AclError::InvalidRuleFormat(format!(
                "identifier `{self}` is not allowed in {} position",
                scope.label()
            )));
        }
        match (&self.id, self.kind.requires_id()) {
            (Some(id), true) => {
                if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(AclError::InvalidId(id.clone()));
                }
                Ok(())
            }
            (None, false) => Ok(()),
            (Some(id), false) => Err(AclError::InvalidId(id.clone())),
            (None, true) => Err(AclError::InvalidId(String::new())),
        }
    }
}

impl fmt::Display for Identifier {
    /// Каноническая текстовая форма сегмента: `#5`, `@12`, `%3` или `*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.prefix())?;
        if let Some(id) = &self.id {
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
