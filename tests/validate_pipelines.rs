//! Cenários fim-a-fim dos três pipelines de validação: ordem fixa dos
//! erros soft, aborto imediato dos hard e montantes sempre presentes nos
//! resultados soft.

use trade_engine_core::trade::error_catalog::TradeErrorCode;
use trade_engine_core::trade::error_map::{severity, Severity};
use trade_engine_core::trade::pricing::{input_from_output, output_from_input};
use trade_engine_core::trade::types::{Reserves, WAD};
use trade_engine_core::trade::validate::{
    validate_buy, validate_redeem, validate_sell, CounterAsset, Snapshot, ValidationResult,
};
use trade_engine_core::U256;

fn wad(n: u128) -> U256 {
    U256::from(n) * U256::from(WAD)
}

/// Trader saudável contra o pool de referência (500 ETH / 241 tokens).
fn fixture() -> Snapshot {
    Snapshot {
        counter: CounterAsset::Eth,
        base_reserves: Reserves::new(wad(500), wad(241)),
        counter_reserves: None,
        eth_balance: Some(wad(50)),
        base_balance: Some(wad(20)),
        counter_balance: Some(wad(50)),
        exchange_allowance: Some(wad(1_000_000)),
        counter_allowance: None,
        redeem_allowance: Some(wad(1_000_000)),
    }
}

fn routed_fixture() -> Snapshot {
    let mut snap = fixture();
    snap.counter = CounterAsset::Token;
    snap.counter_reserves = Some(Reserves::new(wad(900), wad(120_000)));
    snap.counter_balance = Some(wad(10_000));
    snap.counter_allowance = Some(wad(1_000_000));
    snap
}

#[test]
fn buy_direct_quotes_the_curve() {
    let snap = fixture();
    let result = validate_buy(&snap, "1").unwrap();
    assert!(result.error.is_none());
    let expected =
        input_from_output(wad(1), snap.base_reserves.eth, snap.base_reserves.token).unwrap();
    assert_eq!(result.input_value, expected);
    assert_eq!(result.output_value, wad(1));
    let max = result.maximum_input_value.unwrap();
    assert_eq!(max, expected + expected * U256::from(200u32) / U256::from(10_000u32));
}

#[test]
fn buy_routed_charges_counter_tokens() {
    let snap = routed_fixture();
    let result = validate_buy(&snap, "1").unwrap();
    assert!(result.error.is_none());
    let eth_leg =
        input_from_output(wad(1), snap.base_reserves.eth, snap.base_reserves.token).unwrap();
    let counter = snap.counter_reserves.unwrap();
    let expected = input_from_output(eth_leg, counter.token, counter.eth).unwrap();
    assert_eq!(result.input_value, expected);
}

#[test]
fn sell_direct_quotes_the_curve() {
    let snap = fixture();
    let result = validate_sell(&snap, "5").unwrap();
    assert!(result.error.is_none());
    let expected =
        output_from_input(wad(5), snap.base_reserves.token, snap.base_reserves.eth).unwrap();
    assert_eq!(result.output_value, expected);
    assert_eq!(result.input_value, wad(5));
    assert!(result.minimum_output_value.unwrap() < expected);
}

#[test]
fn sell_exceeding_balance_is_soft_with_amounts() {
    let mut snap = fixture();
    snap.base_balance = Some(wad(2));
    let result = validate_sell(&snap, "10").unwrap();
    let err = result.error.as_ref().unwrap();
    assert_eq!(err.code, TradeErrorCode::InsufficientBalance);
    assert_eq!(severity(err.code), Severity::Soft);
    // o preço continua exibível
    assert!(result.output_value > U256::zero());
    assert!(result.minimum_output_value.is_some());
}

#[test]
fn soft_order_gas_before_balance_before_allowance() {
    // as três condições valem ao mesmo tempo; só a primeira é reportada
    let mut snap = fixture();
    snap.eth_balance = Some(U256::zero());
    snap.base_balance = Some(U256::zero());
    snap.exchange_allowance = Some(U256::zero());
    let result = validate_sell(&snap, "1").unwrap();
    assert_eq!(
        result.error.unwrap().code,
        TradeErrorCode::InsufficientEthGas
    );

    // sem o problema de gas, cai para o saldo
    let mut snap = fixture();
    snap.base_balance = Some(U256::zero());
    snap.exchange_allowance = Some(U256::zero());
    let result = validate_sell(&snap, "1").unwrap();
    assert_eq!(
        result.error.unwrap().code,
        TradeErrorCode::InsufficientBalance
    );
}

#[test]
fn unparseable_amount_aborts_every_pipeline() {
    let snap = fixture();
    let pipelines: [fn(&Snapshot, &str) -> trade_engine_core::trade::error::Result<ValidationResult>;
        3] = [validate_buy, validate_sell, validate_redeem];
    for pipeline in pipelines {
        let err = pipeline(&snap, "abc").unwrap_err();
        assert_eq!(err.code, TradeErrorCode::InvalidAmount);
        assert_eq!(severity(err.code), Severity::Hard);
    }
}

#[test]
fn draining_buy_aborts_hard() {
    // pedir a reserva inteira de tokens: denominador não positivo
    let snap = fixture();
    let err = validate_buy(&snap, "241").unwrap_err();
    assert_eq!(err.code, TradeErrorCode::InvalidTrade);
    let err = validate_buy(&snap, "500").unwrap_err();
    assert_eq!(err.code, TradeErrorCode::InvalidTrade);
}

#[test]
fn redeem_checks_redeem_spender_not_exchange() {
    let mut snap = fixture();
    snap.exchange_allowance = Some(U256::zero()); // irrelevante para resgate
    snap.redeem_allowance = Some(wad(3));
    let ok = validate_redeem(&snap, "3").unwrap();
    assert!(ok.error.is_none());
    let short = validate_redeem(&snap, "4").unwrap();
    assert_eq!(
        short.error.unwrap().code,
        TradeErrorCode::InsufficientAllowance
    );
}

#[test]
fn redeem_accepts_fractions_of_a_token() {
    // nenhuma regra de montante mínimo além de > 0
    let snap = fixture();
    let result = validate_redeem(&snap, "0.5").unwrap();
    assert!(result.error.is_none());
    assert_eq!(result.input_value, U256::from(WAD / 2));
}

#[test]
fn ui_strings_are_stable_per_code() {
    let mut snap = fixture();
    snap.eth_balance = Some(U256::zero());
    let result = validate_buy(&snap, "1").unwrap();
    assert_eq!(
        result.error.unwrap().to_user_string(),
        "[TRD-0004] Not Enough ETH to Pay Gas"
    );
}
