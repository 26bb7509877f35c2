//! Precificação CPMM (x·y=k) com fee 997/1000, direta e roteada via ETH.
//! Política de arredondamento:
//! - `output_from_input`: **floor** — o pool nunca paga mais que a curva
//! - `input_from_output`: **floor + 1** — o pagador nunca paga menos que a curva
//! Intermediários sempre em U512 (multiplica antes de dividir, sem perda).

use crate::trade::error::Result;
use crate::trade::error_catalog::TradeErrorCode;
use crate::trade::guardrails::{
    add_wide, ensure_trade_input, ensure_trade_range, mul_wide, narrow, widen,
};
use crate::trade::types::{Reserves, U256, U512, FEE_DENOMINATOR, FEE_NUMERATOR, WAD};
use crate::trade_err;

/// Quanto sai do pool ao enviar `input` do ativo de entrada.
/// `out = floor(997·input·output_reserve / (1000·input_reserve + 997·input))`
pub fn output_from_input(input: U256, input_reserve: U256, output_reserve: U256) -> Result<U256> {
    ensure_trade_input(input)?;

    let fee_adjusted = mul_wide(widen(input), U512::from(FEE_NUMERATOR))?;
    let numerator = mul_wide(fee_adjusted, widen(output_reserve))?;
    let denominator = add_wide(
        mul_wide(widen(input_reserve), U512::from(FEE_DENOMINATOR))?,
        fee_adjusted,
    )?;
    // denominator > 0 pois input > 0
    let out = narrow(numerator / denominator)?;
    ensure_trade_range(out)?;
    Ok(out)
}

/// Quanto precisa entrar no pool para sair exatamente `output`.
/// `in = floor(1000·input_reserve·output / (997·(output_reserve − output))) + 1`
pub fn input_from_output(output: U256, input_reserve: U256, output_reserve: U256) -> Result<U256> {
    ensure_trade_input(output)?;
    if output >= output_reserve {
        // denominador não positivo: o pool não tem esse output
        return Err(trade_err!(
            TradeErrorCode::InvalidTrade,
            output => output.to_string(),
            output_reserve => output_reserve.to_string()
        ));
    }

    let numerator = mul_wide(
        mul_wide(widen(input_reserve), widen(output))?,
        U512::from(FEE_DENOMINATOR),
    )?;
    let denominator = mul_wide(
        widen(output_reserve - output),
        U512::from(FEE_NUMERATOR),
    )?;
    let input = narrow(numerator / denominator + U512::from(1u8))?;
    ensure_trade_range(input)?;
    Ok(input)
}

/// Precificação em dois saltos via a perna nativa (ETH).
///
/// Comprando o ativo-base: ETH necessário para `amount` no pool base, depois
/// quanto do ativo contraparte compra esse ETH no pool contraparte. Vendendo:
/// os mesmos dois passos compostos com `output_from_input`. Cada salto valida
/// o resultado intermediário antes do segundo executar.
pub fn routed_amount(
    buying_base: bool,
    amount: U256,
    base_reserves: Reserves,
    counter_reserves: Reserves,
) -> Result<U256> {
    if buying_base {
        let eth_needed = input_from_output(amount, base_reserves.eth, base_reserves.token)?;
        input_from_output(eth_needed, counter_reserves.token, counter_reserves.eth)
    } else {
        let eth_gained = output_from_input(amount, base_reserves.token, base_reserves.eth)?;
        output_from_input(eth_gained, counter_reserves.eth, counter_reserves.token)
    }
}

/// Taxa de câmbio em WAD: `rate = floor(output·1e18 / input)`.
/// Falha com [`TradeErrorCode::InvalidTrade`] se `input` é zero.
pub fn exchange_rate(input_value: U256, output_value: U256) -> Result<U256> {
    if input_value.is_zero() {
        return Err(trade_err!(TradeErrorCode::InvalidTrade, reason => "zero denominator"));
    }
    narrow(mul_wide(widen(output_value), U512::from(WAD))? / widen(input_value))
}
