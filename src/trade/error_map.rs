//! Severidade dos códigos de erro e acumulador soft (primeiro vence).
use crate::trade::error::TradeError;
use crate::trade::error_catalog::TradeErrorCode;

/// Severidade de um código de erro no pipeline de validação.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Aborta o pipeline; nenhum valor utilizável no resultado.
    Hard,
    /// Anexado a um resultado completo; bloqueia só a submissão.
    Soft,
}

/// Classificação fixa de cada código do catálogo.
pub const fn severity(code: TradeErrorCode) -> Severity {
    match code {
        TradeErrorCode::InvalidAmount | TradeErrorCode::InvalidTrade => Severity::Hard,
        TradeErrorCode::InsufficientAllowance
        | TradeErrorCode::InsufficientEthGas
        | TradeErrorCode::InsufficientBalance => Severity::Soft,
    }
}

/// Acumulador de erros soft: condições são checadas em ordem fixa e
/// apenas a **primeira** verdadeira é retida.
#[derive(Debug, Default)]
pub struct SoftErrors {
    first: Option<TradeError>,
}

impl SoftErrors {
    pub fn new() -> Self {
        Self { first: None }
    }

    /// Registra `code` se `hit` e nenhum erro anterior foi retido.
    pub fn check(&mut self, hit: bool, code: TradeErrorCode) {
        debug_assert!(matches!(severity(code), Severity::Soft));
        if hit && self.first.is_none() {
            self.first = Some(TradeError::new(code));
        }
    }

    /// Consome o acumulador, devolvendo o primeiro erro retido (se houver).
    pub fn into_error(self) -> Option<TradeError> {
        self.first
    }
}
