// Copyright 2025 Nimbic

//! Проверка строки на соответствие грамматике правила.

use super::decoder;

/// Тотальный предикат: `true` тогда и только тогда, когда строка
/// в точности соответствует грамматике
/// `<user> <resources>/<id> <rights> [<zone>]`.
///
/// Использует тот же разбор, что и `decode`, поэтому принимаемый
/// язык у них не расходится. Никогда не паникует.
pub fn validate(raw: &str) -> bool {
    decoder::parse_rule(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет принятие канонических строк.
    #[test]
    fn accepts_canonical_rules() {
        assert!(validate("#5 VM+HOST/* USE+MANAGE"));
        assert!(validate("@12 NET/#3 USE #1"));
        assert!(validate("* VM/* CREATE"));
        assert!(validate("#0 BACKUPJOB+VNTEMPLATE/%7 USE+MANAGE+ADMIN+CREATE *"));
    }

    /// Тест проверяет отказ на типовых дефектах грамматики.
    #[test]
    fn rejects_malformed_rules() {
        assert!(!validate(""));
        assert!(!validate("#5 VM+HOST/* USE+MANAGE+"));
        assert!(!validate("#5 VM+HOST/* BADRIGHT"));
        assert!(!validate("5 VM/* USE"));
        assert!(!validate("#5 VM/ USE"));
        assert!(!validate("#5 /* USE"));
        assert!(!validate("#5 VM/*"));
        assert!(!validate("#5 VM/* USE @1"));
        assert!(!validate("#5 vm/* USE"));
    }
}
