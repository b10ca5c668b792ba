// Copyright 2025 Nimbic

//! Значение ACL-правила.
//!
//! `AclRule` неизменяем: он строится либо из структурных полей
//! (`AclRule::new`, каноническая строка вычисляется), либо разбором
//! готовой строки (`codec::decode`). Правка правила — это новое
//! значение.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    codec::decoder,
    error::{AclError, AclResult},
};

use super::{
    identifier::{Identifier, IdentifierScope},
    resource::ResourceScope,
    rights::Right,
};

/// Одно ACL-правило вида `<user> <resources>/<id> <rights> [<zone>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclRule {
    /// Каноническая текстовая форма, например
    /// `#5 HOST+VM/@12 USE+MANAGE #3`.
    pub raw: String,
    pub user: Identifier,
    pub resources: ResourceScope,
    pub rights: Vec<Right>,
    pub zone: Option<Identifier>,
}

impl AclRule {
    /// Структурный конструктор: проверяет инварианты и вычисляет
    /// каноническую строку.
    pub fn new(
        user: Identifier,
        resources: ResourceScope,
        rights: Vec<Right>,
        zone: Option<Identifier>,
    ) -> AclResult<Self> {
        user.check(IdentifierScope::User)?;
        if rights.is_empty() {
            return Err(AclError::EmptyRights);
        }
        if let Some(z) = &zone {
            z.check(IdentifierScope::Zone)?;
        }

        let raw = compose_raw(&user, &resources, &rights, zone.as_ref());
        Ok(AclRule {
            raw,
            user,
            resources,
            rights,
            zone,
        })
    }

    /// Конструктор для декодера: строка уже разобрана, инварианты
    /// гарантированы разбором.
    pub(crate) fn from_parsed(
        raw: String,
        user: Identifier,
        resources: ResourceScope,
        rights: Vec<Right>,
        zone: Option<Identifier>,
    ) -> Self {
        AclRule {
            raw,
            user,
            resources,
            rights,
            zone,
        }
    }
}

impl fmt::Display for AclRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for AclRule {
    type Err = AclError;

    /// Разбор без разрешения имён; эквивалентен `decode` с пустыми
    /// таблицами соответствий.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decoder::parse_rule(s)
    }
}

/// Собирает каноническую строку из структурных частей.
pub(crate) fn compose_raw(
    user: &Identifier,
    resources: &ResourceScope,
    rights: &[Right],
    zone: Option<&Identifier>,
) -> String {
    let kinds = resources
        .kinds
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join("+");
    let rights = rights
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("+");

    let mut raw = format!("{user} {kinds}/{} {rights}", resources.identifier);
    if let Some(zone) = zone {
        raw.push(' ');
        raw.push_str(&zone.to_string());
    }
    raw
}
