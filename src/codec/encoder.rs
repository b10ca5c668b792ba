// Copyright 2025 Nimbic

//! Энкодер структурных полей в каноническую текстовую форму.

use crate::{
    acl::{AclRule, Identifier, ResourceKind, ResourceScope, Right},
    error::AclResult,
};

/// Собирает каноническую строку правила из структурных частей.
///
/// Выход гарантированно принимается `validate`/`decode`: кодирование
/// и разбор взаимно обратны с точностью до разрешённых имён.
pub fn encode(
    user: Identifier,
    kinds: Vec<ResourceKind>,
    resource_identifier: Identifier,
    rights: Vec<Right>,
    zone: Option<Identifier>,
) -> AclResult<String> {
    let resources = ResourceScope::new(kinds, resource_identifier)?;
    let rule = AclRule::new(user, resources, rights, zone)?;
    Ok(rule.raw)
}
