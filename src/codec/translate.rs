// Copyright 2025 Nimbic

//! Человекочитаемое описание правила.
//!
//! Предложение собирается из фрагментов-шаблонов, получаемых через
//! `Localizer` — шов для непрозрачного переводчика консоли. По
//! умолчанию используется английская таблица.

use crate::{
    acl::{Identifier, IdentifierType, Right},
    error::AclResult,
    lookup::Lookups,
};

use super::decoder::decode;

/// Поставщик локализованных фрагментов предложения.
///
/// Неизвестный ключ возвращается как есть: перевод не обязан быть
/// полным, а `translate` не должен от этого падать.
pub trait Localizer {
    fn tr<'a>(&self, key: &'a str) -> &'a str;
}

/// Английская таблица по умолчанию.
pub struct EnglishLocale;

static TEMPLATES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "applies" => "Rule applies to",
    "all_users" => "all users",
    "user" => "user",
    "group" => "group",
    "cluster" => "cluster",
    "resource" => "resource",
    "allows" => "allows",
    "operation" => "operation",
    "operations" => "operations",
    "and" => "and",
    "over" => "over",
    "resources" => "resources",
    "all" => "all",
    "for_all_zones" => "for all zones",
    "for_zone" => "for zone",
};

impl Localizer for EnglishLocale {
    fn tr<'a>(&self, key: &'a str) -> &'a str {
        TEMPLATES.get(key).copied().unwrap_or(key)
    }
}

/// Переводит правило в предложение с английской таблицей.
pub fn translate(raw: &str, lookups: &Lookups) -> AclResult<String> {
    translate_with(raw, lookups, &EnglishLocale)
}

/// То же с произвольным локализатором.
///
/// Пример результата:
/// `Rule applies to user #5 (alice), allows USE and MANAGE operations
/// over VM and HOST resources, over all, for all zones.`
pub fn translate_with(raw: &str, lookups: &Lookups, loc: &dyn Localizer) -> AclResult<String> {
    let rule = decode(raw, lookups)?;

    let mut out = String::new();
    out.push_str(loc.tr("applies"));
    out.push(' ');
    out.push_str(&subject_phrase(&rule.user, loc));
    out.push_str(", ");
    out.push_str(loc.tr("allows"));
    out.push(' ');
    out.push_str(&join_and(
        rule.rights.iter().map(Right::to_string).collect(),
        loc,
    ));
    out.push(' ');
    out.push_str(loc.tr(if rule.rights.len() == 1 {
        "operation"
    } else {
        "operations"
    }));
    out.push(' ');
    out.push_str(loc.tr("over"));
    out.push(' ');
    out.push_str(&join_and(
        rule.resources.kinds.iter().map(|k| k.to_string()).collect(),
        loc,
    ));
    out.push(' ');
    out.push_str(loc.tr("resources"));
    out.push_str(", ");
    out.push_str(loc.tr("over"));
    out.push(' ');
    out.push_str(&scope_phrase(&rule.resources.identifier, loc));
    out.push_str(", ");
    out.push_str(&zone_phrase(rule.zone.as_ref(), loc));
    out.push('.');
    Ok(out)
}

/// `user #5 (alice)`, `group @12 (ops)` или `all users`.
fn subject_phrase(user: &Identifier, loc: &dyn Localizer) -> String {
    match user.kind {
        IdentifierType::All => loc.tr("all_users").to_string(),
        IdentifierType::Group => named(format!("{} {user}", loc.tr("group")), user),
        _ => named(format!("{} {user}", loc.tr("user")), user),
    }
}

/// `all`, `resource #3 (bob)`, `group @12` или `cluster %7`.
fn scope_phrase(identifier: &Identifier, loc: &dyn Localizer) -> String {
    match identifier.kind {
        IdentifierType::All => loc.tr("all").to_string(),
        IdentifierType::Individual => {
            named(format!("{} {identifier}", loc.tr("resource")), identifier)
        }
        IdentifierType::Group => named(format!("{} {identifier}", loc.tr("group")), identifier),
        IdentifierType::Cluster => {
            named(format!("{} {identifier}", loc.tr("cluster")), identifier)
        }
    }
}

/// `for all zones` или `for zone #1 (z1)`. Отсутствующая зона
/// эквивалентна `*`.
fn zone_phrase(zone: Option<&Identifier>, loc: &dyn Localizer) -> String {
    match zone {
        None => loc.tr("for_all_zones").to_string(),
        Some(z) if z.kind == IdentifierType::All => loc.tr("for_all_zones").to_string(),
        Some(z) => named(format!("{} {z}", loc.tr("for_zone")), z),
    }
}

/// Добавляет `(имя)`, если имя разрешено; иначе остаётся голый id.
fn named(mut phrase: String, identifier: &Identifier) -> String {
    if let Some(name) = &identifier.name {
        phrase.push_str(&format!(" ({name})"));
    }
    phrase
}

/// Соединяет элементы запятыми, последний — через `and`.
fn join_and(items: Vec<String>, loc: &dyn Localizer) -> String {
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, head)) => {
            format!("{} {} {last}", head.join(", "), loc.tr("and"))
        }
    }
}
