// Copyright 2025 Nimbic

//! Права, предоставляемые ACL-правилом.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{AclError, AclResult};

/// Токены прав в порядке возрастания охвата. Написание совпадает с
/// текстовой формой правила.
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
pub enum Right {
    #[strum(serialize = "USE")]
    Use,
    #[strum(serialize = "MANAGE")]
    Manage,
    #[strum(serialize = "ADMIN")]
    Admin,
    #[strum(serialize = "CREATE")]
    Create,
}

impl Right {
    /// Разбирает токен права; неизвестный токен — ошибка.
    pub fn parse(token: &str) -> AclResult<Self> {
        token
            .parse()
            .map_err(|_| AclError::UnknownRight(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    /// Тест проверяет написание токенов прав в обе стороны.
    #[test]
    fn right_token_roundtrip() {
        for right in Right::iter() {
            assert_eq!(Right::parse(&right.to_string()).unwrap(), right);
        }
    }

    /// Тест проверяет отказ на неизвестных и неканонических токенах.
    #[test]
    fn unknown_right_rejected() {
        assert_eq!(
            Right::parse("BADRIGHT").unwrap_err(),
            AclError::UnknownRight("BADRIGHT".into())
        );
        assert!(Right::parse("use").is_err());
        assert!(Right::parse("").is_err());
    }
}
