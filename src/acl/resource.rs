// Copyright 2025 Nimbic

//! Виды ресурсов, к которым может относиться ACL-правило.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{AclError, AclResult};

use super::identifier::{Identifier, IdentifierScope};

/// Распознаваемые токены видов ресурсов. Написание вариантов совпадает
/// с текстовой формой правила (верхний регистр, без разделителей).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum ResourceKind {
    #[strum(serialize = "VM")]
    Vm,
    #[strum(serialize = "HOST")]
    Host,
    #[strum(serialize = "NET")]
    Net,
    #[strum(serialize = "IMAGE")]
    Image,
    #[strum(serialize = "USER")]
    User,
    #[strum(serialize = "TEMPLATE")]
    Template,
    #[strum(serialize = "GROUP")]
    Group,
    #[strum(serialize = "DATASTORE")]
    Datastore,
    #[strum(serialize = "CLUSTER")]
    Cluster,
    #[strum(serialize = "DOCUMENT")]
    Document,
    #[strum(serialize = "ZONE")]
    Zone,
    #[strum(serialize = "SECGROUP")]
    SecGroup,
    #[strum(serialize = "VDC")]
    Vdc,
    #[strum(serialize = "VROUTER")]
    VRouter,
    #[strum(serialize = "MARKETPLACE")]
    Marketplace,
    #[strum(serialize = "MARKETPLACEAPP")]
    MarketplaceApp,
    #[strum(serialize = "VMGROUP")]
    VmGroup,
    #[strum(serialize = "VNTEMPLATE")]
    VnTemplate,
    #[strum(serialize = "BACKUPJOB")]
    BackupJob,
}

impl ResourceKind {
    /// Разбирает токен вида ресурса; неизвестный токен — ошибка.
    pub fn parse(token: &str) -> AclResult<Self> {
        token
            .parse()
            .map_err(|_| AclError::UnknownResourceKind(token.to_string()))
    }
}

/// Область действия правила по ресурсам: непустой упорядоченный список
/// видов плюс идентификатор охвата (`*`, `#id`, `@id`, `%id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceScope {
    pub kinds: Vec<ResourceKind>,
    pub identifier: Identifier,
}

impl ResourceScope {
    pub fn new(kinds: Vec<ResourceKind>, identifier: Identifier) -> AclResult<Self> {
        if kinds.is_empty() {
            return Err(AclError::EmptyResourceKinds);
        }
        identifier.check(IdentifierScope::Resource)?;
        Ok(ResourceScope { kinds, identifier })
    }
}
