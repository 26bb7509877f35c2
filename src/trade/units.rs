//! Parse e formatação de montantes em ponto fixo de 18 casas.
//! `parse_units("1.5")` → 1_500000000000000000; `format_units` é o inverso
//! para exibição (zeros finais aparados).

use crate::trade::error::Result;
use crate::trade::error_catalog::TradeErrorCode;
use crate::trade::types::{DECIMALS, U256, WAD};
use crate::{trade_bail, trade_err};

/// Converte uma string decimal em unidades inteiras de 18 casas.
/// Rejeita: vazio, sinal, expoente, mais de um ponto, mais de 18 casas
/// fracionárias e overflow de 256 bits.
pub fn parse_units(input: &str) -> Result<U256> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        trade_bail!(TradeErrorCode::InvalidAmount, input => input, reason => "empty");
    }
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        trade_bail!(TradeErrorCode::InvalidAmount, input => input, reason => "no digits");
    }
    if frac_part.len() > DECIMALS as usize {
        trade_bail!(
            TradeErrorCode::InvalidAmount,
            input => input,
            reason => "too many decimal places"
        );
    }

    let int_units = parse_digits(if int_part.is_empty() { "0" } else { int_part }, input)?;
    // fração alinhada à direita em 18 casas
    let mut frac_padded = String::from(frac_part);
    while frac_padded.len() < DECIMALS as usize {
        frac_padded.push('0');
    }
    let frac_units = parse_digits(&frac_padded, input)?;

    int_units
        .checked_mul(U256::from(WAD))
        .and_then(|v| v.checked_add(frac_units))
        .ok_or_else(|| trade_err!(TradeErrorCode::InvalidAmount, input => input, reason => "overflow"))
}

fn parse_digits(digits: &str, original: &str) -> Result<U256> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        trade_bail!(TradeErrorCode::InvalidAmount, input => original, reason => "non-digit");
    }
    U256::from_dec_str(digits)
        .map_err(|_| trade_err!(TradeErrorCode::InvalidAmount, input => original, reason => "overflow"))
}

/// Renderiza unidades de 18 casas como string decimal ("1.5", "0.01").
/// Mantém ao menos uma casa fracionária.
pub fn format_units(value: U256) -> String {
    let wad = U256::from(WAD);
    let int_part = value / wad;
    let frac_part = value % wad;
    let mut frac = format!("{:018}", frac_part.as_u128());
    while frac.len() > 1 && frac.ends_with('0') {
        frac.pop();
    }
    format!("{int_part}.{frac}")
}
