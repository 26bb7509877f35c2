//! Guard-rails numéricos: ampliação para 512 bits, downcast checado e
//! faixas válidas de trade. Toda multiplicação-antes-da-divisão do motor
//! passa por aqui.

use crate::trade::error::{Result, TradeError};
use crate::trade::error_catalog::TradeErrorCode;
use crate::trade::types::{U256, U512};

/// Amplia um U256 para U512 (sem perda).
pub fn widen(v: U256) -> U512 {
    let mut buf = [0u8; 32];
    v.to_big_endian(&mut buf);
    U512::from_big_endian(&buf)
}

/// Downcast U512 → U256 com checagem de overflow.
pub fn narrow(v: U512) -> Result<U256> {
    if v.bits() > 256 {
        return Err(overflow_err("narrow", &v));
    }
    let mut buf = [0u8; 64];
    v.to_big_endian(&mut buf);
    Ok(U256::from_big_endian(&buf[32..]))
}

/// Downcast saturado em `U256::MAX` (para janelas de slippage, que nunca falham).
pub fn narrow_saturating(v: U512) -> U256 {
    if v.bits() > 256 {
        return U256::MAX;
    }
    let mut buf = [0u8; 64];
    v.to_big_endian(&mut buf);
    U256::from_big_endian(&buf[32..])
}

/// Multiplicação U512 checada.
pub fn mul_wide(a: U512, b: U512) -> Result<U512> {
    a.checked_mul(b).ok_or_else(|| overflow_err("mul", &a))
}

/// Adição U512 checada.
pub fn add_wide(a: U512, b: U512) -> Result<U512> {
    a.checked_add(b).ok_or_else(|| overflow_err("add", &a))
}

/// Input de precificação deve ser > 0.
pub fn ensure_trade_input(v: U256) -> Result<()> {
    if v.is_zero() {
        return Err(TradeError::new(TradeErrorCode::InvalidTrade).with_context("reason", "zero input"));
    }
    Ok(())
}

/// Resultado de precificação deve ficar em (0, MAX) — espelha a checagem
/// `amount <= 0 || amount >= MaxUint256` do protocolo.
pub fn ensure_trade_range(v: U256) -> Result<()> {
    if v.is_zero() || v == U256::MAX {
        return Err(
            TradeError::new(TradeErrorCode::InvalidTrade).with_context("amount", v.to_string())
        );
    }
    Ok(())
}

fn overflow_err(op: &str, operand: &U512) -> TradeError {
    TradeError::new(TradeErrorCode::InvalidTrade)
        .with_context("reason", "overflow")
        .with_context("op", op)
        .with_context("operand", operand.to_string())
}
