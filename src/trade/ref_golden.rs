//! Referência de alta precisão (BigUint/BigRational) para as fórmulas
//! fechadas 997/1000 do pool de produto constante.
//!
//! Serve de **oráculo independente** nos testes de arredondamento: calcula
//! o valor contínuo exato de cada cotação e as quantizações esperadas
//! (floor no output, floor+1 no input). Não entra no caminho de produção.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed};

use crate::trade::types::{U256, FEE_DENOMINATOR, FEE_NUMERATOR};

fn big(v: U256) -> BigUint {
    let mut buf = [0u8; 32];
    v.to_big_endian(&mut buf);
    BigUint::from_bytes_be(&buf)
}

fn to_u256(v: &BigUint) -> U256 {
    U256::from_dec_str(&v.to_string()).expect("oracle value exceeds 256 bits")
}

/// Valor contínuo de `output_from_input`:
/// `997·x·r_out / (1000·r_in + 997·x)`.
pub fn exact_output(input: U256, input_reserve: U256, output_reserve: U256) -> BigRational {
    let num = BigUint::from(FEE_NUMERATOR) * big(input) * big(output_reserve);
    let den = BigUint::from(FEE_DENOMINATOR) * big(input_reserve)
        + BigUint::from(FEE_NUMERATOR) * big(input);
    BigRational::new(BigInt::from(num), BigInt::from(den))
}

/// Valor contínuo de `input_from_output`:
/// `1000·r_in·y / (997·(r_out − y))`. `None` quando `y >= r_out`.
pub fn exact_input(
    output: U256,
    input_reserve: U256,
    output_reserve: U256,
) -> Option<BigRational> {
    if output >= output_reserve {
        return None;
    }
    let num = BigUint::from(FEE_DENOMINATOR) * big(input_reserve) * big(output);
    let den = BigUint::from(FEE_NUMERATOR) * (big(output_reserve) - big(output));
    Some(BigRational::new(BigInt::from(num), BigInt::from(den)))
}

/// Quantização esperada do output: `floor(exato)`, via `div_floor` inteiro.
pub fn expected_output_units(input: U256, input_reserve: U256, output_reserve: U256) -> U256 {
    let num = BigUint::from(FEE_NUMERATOR) * big(input) * big(output_reserve);
    let den = BigUint::from(FEE_DENOMINATOR) * big(input_reserve)
        + BigUint::from(FEE_NUMERATOR) * big(input);
    to_u256(&num.div_floor(&den))
}

/// Quantização esperada do input: `floor(exato) + 1`.
/// `None` quando `y >= r_out`.
pub fn expected_input_units(
    output: U256,
    input_reserve: U256,
    output_reserve: U256,
) -> Option<U256> {
    if output >= output_reserve {
        return None;
    }
    let num = BigUint::from(FEE_DENOMINATOR) * big(input_reserve) * big(output);
    let den = BigUint::from(FEE_NUMERATOR) * (big(output_reserve) - big(output));
    Some(to_u256(&(num.div_floor(&den) + BigUint::one())))
}

/// Floor de um racional não negativo para U256 (suporte aos testes).
pub fn floor_to_u256(r: &BigRational) -> U256 {
    let f = r.floor().to_integer();
    debug_assert!(!f.is_negative());
    to_u256(f.magnitude())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::types::WAD;

    fn wad(n: u128) -> U256 {
        U256::from(n) * U256::from(WAD)
    }

    #[test]
    fn t_exact_output_floor_matches_units() {
        let (x, y, dx) = (wad(500), wad(241), wad(10));
        let exact = exact_output(dx, x, y);
        assert_eq!(floor_to_u256(&exact), expected_output_units(dx, x, y));
    }

    #[test]
    fn t_exact_input_is_floor_plus_one() {
        let (x, y, dy) = (wad(500), wad(241), wad(1));
        let exact = exact_input(dy, x, y).unwrap();
        let expected = expected_input_units(dy, x, y).unwrap();
        assert_eq!(expected, floor_to_u256(&exact) + U256::from(1u8));
    }

    #[test]
    fn t_oracle_refuses_draining_output() {
        let (x, y) = (wad(500), wad(241));
        assert!(exact_input(y, x, y).is_none());
        assert!(expected_input_units(wad(300), x, y).is_none());
    }
}
