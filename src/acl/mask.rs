// Copyright 2025 Nimbic

//! Числовая форма ACL-правила.
//!
//! Ядро платформы адресует правила четвёркой 64-битных масок,
//! передаваемой в API шестнадцатеричными строками. Младшие 32 бита
//! маски занимает id, биты 32..35 — тип идентификатора, биты начиная
//! с 36-го — виды ресурсов.

use std::fmt;

use crate::error::{AclError, AclResult};

use super::{
    identifier::{Identifier, IdentifierType},
    resource::ResourceKind,
    rights::Right,
    rule::AclRule,
};

bitflags::bitflags! {
    /// Битовая маска прав правила.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RightsMask: u64 {
        const USE    = 0x1;
        const MANAGE = 0x2;
        const ADMIN  = 0x4;
        const CREATE = 0x8;
    }
}

impl From<Right> for RightsMask {
    fn from(right: Right) -> Self {
        match right {
            Right::Use => RightsMask::USE,
            Right::Manage => RightsMask::MANAGE,
            Right::Admin => RightsMask::ADMIN,
            Right::Create => RightsMask::CREATE,
        }
    }
}

impl RightsMask {
    /// Объединяет список прав в одну маску.
    pub fn from_rights(rights: &[Right]) -> Self {
        rights
            .iter()
            .fold(RightsMask::empty(), |acc, r| acc | RightsMask::from(*r))
    }
}

impl IdentifierType {
    /// Старший бит типа идентификатора в числовой форме.
    pub const fn mask_bit(self) -> u64 {
        match self {
            IdentifierType::Individual => 0x0000_0001_0000_0000,
            IdentifierType::Group => 0x0000_0002_0000_0000,
            IdentifierType::All => 0x0000_0004_0000_0000,
            IdentifierType::Cluster => 0x0000_0008_0000_0000,
        }
    }
}

impl ResourceKind {
    /// Бит вида ресурса, по одному начиная с 36-го, в порядке
    /// перечисления токенов.
    pub const fn mask_bit(self) -> u64 {
        match self {
            ResourceKind::Vm => 0x0000_0010_0000_0000,
            ResourceKind::Host => 0x0000_0020_0000_0000,
            ResourceKind::Net => 0x0000_0040_0000_0000,
            ResourceKind::Image => 0x0000_0080_0000_0000,
            ResourceKind::User => 0x0000_0100_0000_0000,
            ResourceKind::Template => 0x0000_0200_0000_0000,
            ResourceKind::Group => 0x0000_0400_0000_0000,
            ResourceKind::Datastore => 0x0000_0800_0000_0000,
            ResourceKind::Cluster => 0x0000_1000_0000_0000,
            ResourceKind::Document => 0x0000_2000_0000_0000,
            ResourceKind::Zone => 0x0000_4000_0000_0000,
            ResourceKind::SecGroup => 0x0000_8000_0000_0000,
            ResourceKind::Vdc => 0x0001_0000_0000_0000,
            ResourceKind::VRouter => 0x0002_0000_0000_0000,
            ResourceKind::Marketplace => 0x0004_0000_0000_0000,
            ResourceKind::MarketplaceApp => 0x0008_0000_0000_0000,
            ResourceKind::VmGroup => 0x0010_0000_0000_0000,
            ResourceKind::VnTemplate => 0x0020_0000_0000_0000,
            ResourceKind::BackupJob => 0x0040_0000_0000_0000,
        }
    }
}

/// Четвёрка масок, которую принимает API ядра.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRule {
    pub user: u64,
    pub resource: u64,
    pub rights: u64,
    pub zone: u64,
}

impl TryFrom<&AclRule> for NumericRule {
    type Error = AclError;

    fn try_from(rule: &AclRule) -> AclResult<Self> {
        let user = identifier_mask(&rule.user)?;

        let mut resource = identifier_mask(&rule.resources.identifier)?;
        for kind in &rule.resources.kinds {
            resource |= kind.mask_bit();
        }

        let rights = RightsMask::from_rights(&rule.rights).bits();

        // Отсутствие зоны означает «все зоны».
        let zone = match &rule.zone {
            Some(z) => identifier_mask(z)?,
            None => IdentifierType::All.mask_bit(),
        };

        Ok(NumericRule {
            user,
            resource,
            rights,
            zone,
        })
    }
}

impl fmt::Display for NumericRule {
    /// Шестнадцатеричная форма для передачи в API:
    /// `0x100000005 0x11000000000 0x3 0x400000000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#x} {:#x} {:#x} {:#x}",
            self.user, self.resource, self.rights, self.zone
        )
    }
}

/// Маска идентификатора: бит типа плюс id в младших 32 битах.
fn identifier_mask(identifier: &Identifier) -> AclResult<u64> {
    let id = match &identifier.id {
        Some(id) => id
            .parse::<u32>()
            .map_err(|_| AclError::InvalidId(id.clone()))? as u64,
        None => 0,
    };
    Ok(identifier.kind.mask_bit() | id)
}
