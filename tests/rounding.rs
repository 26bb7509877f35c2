//! Direção de arredondamento das cotações, validada contra o oráculo
//! BigRational: floor no output, floor+1 no input, janela recortada.

use trade_engine_core::trade::pricing::{input_from_output, output_from_input};
use trade_engine_core::trade::ref_golden::{
    exact_input, exact_output, expected_input_units, expected_output_units, floor_to_u256,
};
use trade_engine_core::trade::slippage;
use trade_engine_core::trade::types::{ALLOWED_SLIPPAGE_BIPS, WAD};
use trade_engine_core::U256;

fn wad(n: u128) -> U256 {
    U256::from(n) * U256::from(WAD)
}

#[test]
fn r1_output_is_floor_of_continuous_value() {
    let cases = [
        (wad(500), wad(241), wad(10)),
        (wad(1_000_000), wad(1_000_000), wad(10_000)),
        (wad(1_000), wad(1_000_000_000), wad(100)),
        (wad(500), wad(241), U256::from(1u8)), // 1 wei
    ];
    for (x, y, dx) in cases {
        let expected = expected_output_units(dx, x, y);
        match output_from_input(dx, x, y) {
            Ok(v) => {
                assert_eq!(v, expected);
                assert_eq!(v, floor_to_u256(&exact_output(dx, x, y)));
            }
            // floor pode zerar para dx minúsculo; o core rejeita o zero
            Err(_) => assert!(expected.is_zero()),
        }
    }
}

#[test]
fn r2_input_is_floor_plus_one() {
    let cases = [
        (wad(500), wad(241), wad(1)),
        (wad(1_000_000), wad(1_000_000), wad(9_870)),
        (wad(1_000_000_000), wad(1_000), U256::from(WAD / 2)),
    ];
    for (x, y, dy) in cases {
        let dx = input_from_output(dy, x, y).unwrap();
        assert_eq!(dx, expected_input_units(dy, x, y).unwrap());
        let exact = exact_input(dy, x, y).unwrap();
        assert_eq!(dx, floor_to_u256(&exact) + U256::from(1u8));
    }
}

#[test]
fn r3_quoted_input_never_undershoots() {
    // pagar o input cotado rende ao menos o dy pedido (arredonda pró-pool)
    for dy_units in [1u128, 3, 7, 50] {
        let (x, y) = (wad(500), wad(241));
        let dy = wad(dy_units);
        let dx = input_from_output(dy, x, y).unwrap();
        let out = output_from_input(dx, x, y).unwrap();
        assert!(out >= dy, "dy={dy_units}: out={out} < dy={dy}");
    }
}

#[test]
fn r4_slippage_window_is_clipped_floor() {
    let v = wad(99);
    let w = slippage::window(v, ALLOWED_SLIPPAGE_BIPS);
    // offset = floor(v·200/10000)
    let offset = v * U256::from(ALLOWED_SLIPPAGE_BIPS) / U256::from(10_000u32);
    assert_eq!(w.minimum, v - offset);
    assert_eq!(w.maximum, v + offset);
}

#[test]
fn r5_minimum_zero_when_offset_covers_value() {
    // tolerância de 100%: offset == value → mínimo exatamente 0
    let v = wad(4);
    let w = slippage::window(v, 10_000);
    assert_eq!(w.minimum, U256::zero());
    assert_eq!(w.maximum, wad(8));
}
