//! Pipelines de validação pré-submissão (buy / sell / redeem).
//!
//! Política compartilhada: erros **soft** nunca impedem o cálculo dos
//! montantes — o resultado sai completo com o primeiro soft da ordem fixa
//! anexado. Erros **hard** (parse ou precificação) abortam via `Err`, sem
//! montantes parciais. Funções puras sobre um snapshot passado por valor.

use tracing::debug;

use crate::trade::error::Result;
use crate::trade::error_catalog::TradeErrorCode;
use crate::trade::error_map::SoftErrors;
use crate::trade::pricing;
use crate::trade::slippage;
use crate::trade::types::{Reserves, SlippageWindow, U256, ALLOWED_SLIPPAGE_BIPS, MIN_ETH_FOR_GAS};
use crate::trade::units;
use crate::{trade_bail, trade_err};

/// Ativo contraparte selecionado para pagar (buy) ou receber (sell).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAsset {
    /// Perna direta: o próprio ativo nativo.
    Eth,
    /// Outro token ERC — roteia via ETH pelos dois pools.
    Token,
}

/// Snapshot consistente do estado externo, amostrado pelo coletor de dados
/// no mesmo bloco (ou posterior) para todos os campos. `None` em saldo ou
/// allowance significa "ainda carregando" e pula a checagem soft
/// correspondente.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub counter: CounterAsset,
    /// Pool do token-base (resgatável) contra ETH.
    pub base_reserves: Reserves,
    /// Pool do ativo contraparte contra ETH; exigido quando `counter == Token`.
    pub counter_reserves: Option<Reserves>,
    pub eth_balance: Option<U256>,
    pub base_balance: Option<U256>,
    pub counter_balance: Option<U256>,
    /// Allowance do token-base para o exchange do próprio pool (venda).
    pub exchange_allowance: Option<U256>,
    /// Allowance do token contraparte para o exchange dele (compra roteada).
    pub counter_allowance: Option<U256>,
    /// Allowance do token-base para o contrato de resgate.
    pub redeem_allowance: Option<U256>,
}

/// Resultado de uma validação. Criado novo a cada chamada; nunca mutado.
#[derive(Clone, Debug)]
pub struct ValidationResult {
    pub input_value: U256,
    pub output_value: U256,
    pub maximum_input_value: Option<U256>,
    pub minimum_output_value: Option<U256>,
    pub error: Option<crate::trade::error::TradeError>,
}

/// Compra do token-base: `amount` é o output desejado (string decimal).
///
/// Ordem soft: reserva de gas → saldo do ativo pagador < máximo → allowance
/// do contraparte < máximo (só quando contraparte é token).
pub fn validate_buy(snapshot: &Snapshot, amount: &str) -> Result<ValidationResult> {
    let parsed = parse_positive_units(amount)?;
    let input_value = quote_buy(snapshot, parsed)?;
    let SlippageWindow { maximum, .. } = slippage::window(input_value, ALLOWED_SLIPPAGE_BIPS);

    let mut soft = SoftErrors::new();
    soft.check(
        below(snapshot.eth_balance, min_eth_for_gas()),
        TradeErrorCode::InsufficientEthGas,
    );
    let paying_balance = match snapshot.counter {
        CounterAsset::Eth => snapshot.eth_balance,
        CounterAsset::Token => snapshot.counter_balance,
    };
    soft.check(
        below(paying_balance, maximum),
        TradeErrorCode::InsufficientBalance,
    );
    if snapshot.counter == CounterAsset::Token {
        soft.check(
            below(snapshot.counter_allowance, maximum),
            TradeErrorCode::InsufficientAllowance,
        );
    }

    debug!(
        op = "validate_buy",
        output = %units::format_units(parsed),
        input = %units::format_units(input_value),
        max_input = %units::format_units(maximum),
        "cotado"
    );

    Ok(ValidationResult {
        input_value,
        output_value: parsed,
        maximum_input_value: Some(maximum),
        minimum_output_value: None,
        error: soft.into_error(),
    })
}

/// Venda do token-base: `amount` é o input a vender (string decimal).
///
/// Ordem soft: reserva de gas → saldo do token-base < pedido → allowance do
/// exchange < pedido (o pool exige allowance mesmo na perna direta p/ ETH).
pub fn validate_sell(snapshot: &Snapshot, amount: &str) -> Result<ValidationResult> {
    let parsed = parse_positive_units(amount)?;
    let output_value = quote_sell(snapshot, parsed)?;
    let SlippageWindow { minimum, .. } = slippage::window(output_value, ALLOWED_SLIPPAGE_BIPS);

    let mut soft = SoftErrors::new();
    soft.check(
        below(snapshot.eth_balance, min_eth_for_gas()),
        TradeErrorCode::InsufficientEthGas,
    );
    soft.check(
        below(snapshot.base_balance, parsed),
        TradeErrorCode::InsufficientBalance,
    );
    soft.check(
        below(snapshot.exchange_allowance, parsed),
        TradeErrorCode::InsufficientAllowance,
    );

    debug!(
        op = "validate_sell",
        input = %units::format_units(parsed),
        output = %units::format_units(output_value),
        min_output = %units::format_units(minimum),
        "cotado"
    );

    Ok(ValidationResult {
        input_value: parsed,
        output_value,
        maximum_input_value: None,
        minimum_output_value: Some(minimum),
        error: soft.into_error(),
    })
}

/// Resgate físico: queima `amount` do token-base; sem precificação.
///
/// Mesmas checagens soft da venda, mas contra a allowance do contrato de
/// resgate. Não exige montante mínimo.
pub fn validate_redeem(snapshot: &Snapshot, amount: &str) -> Result<ValidationResult> {
    let parsed = parse_positive_units(amount)?;

    let mut soft = SoftErrors::new();
    soft.check(
        below(snapshot.eth_balance, min_eth_for_gas()),
        TradeErrorCode::InsufficientEthGas,
    );
    soft.check(
        below(snapshot.base_balance, parsed),
        TradeErrorCode::InsufficientBalance,
    );
    soft.check(
        below(snapshot.redeem_allowance, parsed),
        TradeErrorCode::InsufficientAllowance,
    );

    debug!(op = "validate_redeem", amount = %units::format_units(parsed), "validado");

    Ok(ValidationResult {
        input_value: parsed,
        output_value: parsed,
        maximum_input_value: None,
        minimum_output_value: None,
        error: soft.into_error(),
    })
}

fn min_eth_for_gas() -> U256 {
    U256::from(MIN_ETH_FOR_GAS)
}

/// `Some(v)` abaixo do exigido; `None` (carregando) nunca dispara soft.
fn below(observed: Option<U256>, required: U256) -> bool {
    matches!(observed, Some(v) if v < required)
}

fn parse_positive_units(amount: &str) -> Result<U256> {
    let parsed = units::parse_units(amount)?;
    if parsed.is_zero() {
        trade_bail!(TradeErrorCode::InvalidAmount, input => amount, reason => "non-positive");
    }
    Ok(parsed)
}

fn quote_buy(snapshot: &Snapshot, parsed: U256) -> Result<U256> {
    match snapshot.counter {
        CounterAsset::Eth => pricing::input_from_output(
            parsed,
            snapshot.base_reserves.eth,
            snapshot.base_reserves.token,
        ),
        CounterAsset::Token => {
            let counter = required_counter_reserves(snapshot)?;
            pricing::routed_amount(true, parsed, snapshot.base_reserves, counter)
        }
    }
}

fn quote_sell(snapshot: &Snapshot, parsed: U256) -> Result<U256> {
    match snapshot.counter {
        CounterAsset::Eth => pricing::output_from_input(
            parsed,
            snapshot.base_reserves.token,
            snapshot.base_reserves.eth,
        ),
        CounterAsset::Token => {
            let counter = required_counter_reserves(snapshot)?;
            pricing::routed_amount(false, parsed, snapshot.base_reserves, counter)
        }
    }
}

fn required_counter_reserves(snapshot: &Snapshot) -> Result<Reserves> {
    snapshot.counter_reserves.ok_or_else(
        || trade_err!(TradeErrorCode::InvalidTrade, reason => "counter reserves unavailable"),
    )
}
