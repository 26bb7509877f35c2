//! Catálogo imutável de erros de validação de trade.
use core::fmt;

/// Código de erro do motor de trade.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum TradeErrorCode {
    /// Montante pedido não parseável ou não positivo.
    InvalidAmount,
    /// Fórmula de preço produziu resultado fora da faixa (0, MAX).
    InvalidTrade,
    /// Allowance do spender abaixo do necessário.
    InsufficientAllowance,
    /// Saldo de ETH abaixo da reserva mínima para gas.
    InsufficientEthGas,
    /// Saldo do ativo pagador abaixo do necessário.
    InsufficientBalance,
}

impl TradeErrorCode {
    /// Código textual estável do erro.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "TRD-0001",
            Self::InvalidTrade => "TRD-0002",
            Self::InsufficientAllowance => "TRD-0003",
            Self::InsufficientEthGas => "TRD-0004",
            Self::InsufficientBalance => "TRD-0005",
        }
    }

    /// Título curto.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "Montante inválido",
            Self::InvalidTrade => "Trade inválido",
            Self::InsufficientAllowance => "Allowance insuficiente",
            Self::InsufficientEthGas => "ETH insuficiente para gas",
            Self::InsufficientBalance => "Saldo insuficiente",
        }
    }

    /// Mensagem fixa exibida pela UI (produto em inglês).
    pub const fn message_ui(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "Invalid Amount",
            Self::InvalidTrade => "Invalid Trade",
            Self::InsufficientAllowance => "Set Allowance to Continue",
            Self::InsufficientEthGas => "Not Enough ETH to Pay Gas",
            Self::InsufficientBalance => "Not Enough of Selected Token",
        }
    }

    /// Retorna todas as variantes em ordem estável.
    pub fn all() -> &'static [TradeErrorCode] {
        const ALL: &[TradeErrorCode] = &[
            TradeErrorCode::InvalidAmount,
            TradeErrorCode::InvalidTrade,
            TradeErrorCode::InsufficientAllowance,
            TradeErrorCode::InsufficientEthGas,
            TradeErrorCode::InsufficientBalance,
        ];
        ALL
    }
}

impl fmt::Display for TradeErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Mensagem padrão na localidade ativa (en).
pub fn default_locale_message(code: TradeErrorCode) -> &'static str {
    code.message_ui()
}
