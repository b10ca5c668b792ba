// Copyright 2025 Nimbic

//! Декодер текстовой формы ACL-правила.
//!
//! Разбор строгий: ровно 3 или 4 сегмента, разделённые одиночными
//! пробелами, точные написания токенов. Некорректная строка даёт
//! ошибку сразу — частично заполненных значений не бывает.

use crate::{
    acl::{AclRule, Identifier, IdentifierScope, ResourceKind, ResourceScope, Right},
    error::{AclError, AclResult},
    lookup::Lookups,
};

/// Разбирает правило и разрешает отображаемые имена по таблицам.
pub fn decode(raw: &str, lookups: &Lookups) -> AclResult<AclRule> {
    let mut rule = match parse_rule(raw) {
        Ok(rule) => rule,
        Err(e) => {
            tracing::debug!(rule = raw, error = %e, "acl rule rejected");
            return Err(e);
        }
    };
    resolve_names(&mut rule, lookups);
    tracing::trace!(rule = raw, "acl rule decoded");
    Ok(rule)
}

/// Строгий разбор без разрешения имён.
pub(crate) fn parse_rule(raw: &str) -> AclResult<AclRule> {
    let segments: Vec<&str> = raw.split(' ').collect();
    if segments.len() != 3 && segments.len() != 4 {
        return Err(AclError::InvalidRuleFormat(format!(
            "expected 3 or 4 segments, got {}",
            segments.len()
        )));
    }
    // Двойной, ведущий или замыкающий пробел даёт пустой сегмент.
    if segments.iter().any(|s| s.is_empty()) {
        return Err(AclError::InvalidRuleFormat(
            "empty segment (check whitespace)".into(),
        ));
    }

    let user = Identifier::parse(segments[0], IdentifierScope::User)?;

    let (kinds_str, id_str) = segments[1].split_once('/').ok_or_else(|| {
        AclError::InvalidRuleFormat("resource segment must contain `/`".into())
    })?;
    let kinds = kinds_str
        .split('+')
        .map(ResourceKind::parse)
        .collect::<AclResult<Vec<_>>>()?;
    let identifier = Identifier::parse(id_str, IdentifierScope::Resource)?;
    let resources = ResourceScope::new(kinds, identifier)?;

    let rights = segments[2]
        .split('+')
        .map(Right::parse)
        .collect::<AclResult<Vec<_>>>()?;

    let zone = segments
        .get(3)
        .map(|s| Identifier::parse(s, IdentifierScope::Zone))
        .transpose()?;

    Ok(AclRule::from_parsed(
        raw.to_string(),
        user,
        resources,
        rights,
        zone,
    ))
}

/// Подставляет имена из таблиц; промах оставляет `name = None`.
fn resolve_names(rule: &mut AclRule, lookups: &Lookups) {
    rule.user.name = lookups
        .resolve(&rule.user, IdentifierScope::User)
        .map(str::to_string);
    rule.resources.identifier.name = lookups
        .resolve(&rule.resources.identifier, IdentifierScope::Resource)
        .map(str::to_string);
    if let Some(zone) = &mut rule.zone {
        zone.name = lookups
            .resolve(zone, IdentifierScope::Zone)
            .map(str::to_string);
    }
}
