//! Tipos básicos do motor de trade (escala fixa 1e18) + U256/U512 para
//! intermediários seguros de multiplicação-antes-da-divisão.

use uint::construct_uint;

construct_uint! {
    /// Inteiro de 256 bits — quantidades on-chain com 18 casas implícitas.
    pub struct U256(4);
}
construct_uint! {
    /// Inteiro de 512 bits para intermediários (nunca persiste).
    pub struct U512(8);
}

/// Frações em bips (1 bip = 0,01%).
pub type Bips = u32;
/// Unidades de gas (limit e price cabem folgadamente em u128).
pub type Gas = u128;

pub const DECIMALS: u32 = 18;
/// 1e18 — uma unidade inteira do ativo.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Fee do protocolo: 0,3% sobre o input (997/1000).
pub const FEE_NUMERATOR: u64 = 997;
pub const FEE_DENOMINATOR: u64 = 1000;

pub const BIPS_SCALE: Bips = 10_000;
/// Tolerância de slippage do protocolo: 2%.
pub const ALLOWED_SLIPPAGE_BIPS: Bips = 200;
/// Margem sobre a estimativa de gas limit: 10%.
pub const GAS_MARGIN_BIPS: Bips = 1_000;
/// Multiplicador sobre o gas price corrente: 150%.
pub const GAS_PRICE_MULTIPLIER_PCT: u32 = 150;
/// Saldo mínimo de ETH reservado para gas: 0,01 unidade nativa.
pub const MIN_ETH_FOR_GAS: u128 = WAD / 100;
/// Janela de validade da transação (segundos).
pub const DEADLINE_FROM_NOW: u64 = 60 * 15;

/// Snapshot das reservas de um pool (ETH, token). Read-only neste core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reserves {
    pub eth: U256,
    pub token: U256,
}

impl Reserves {
    pub fn new(eth: U256, token: U256) -> Self {
        Self { eth, token }
    }
}

/// Janela de proteção de preço em torno de um valor cotado.
/// Sempre satisfaz `minimum <= valor <= maximum`; derivada, nunca persiste.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlippageWindow {
    pub minimum: U256,
    pub maximum: U256,
}
