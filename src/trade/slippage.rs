//! Janela de slippage em torno de um valor cotado. Simétrica, recortada
//! em [0, MAX], nunca falha.

use crate::trade::guardrails::{narrow_saturating, widen};
use crate::trade::types::{Bips, SlippageWindow, U256, U512, BIPS_SCALE};

/// `offset = value·tolerance/10000` (floor);
/// `minimum = max(0, value − offset)`, `maximum = min(MAX, value + offset)`.
pub fn window(value: U256, tolerance_bips: Bips) -> SlippageWindow {
    let wide = widen(value);
    let offset = wide * U512::from(tolerance_bips) / U512::from(BIPS_SCALE);
    let minimum = match wide.checked_sub(offset) {
        // m <= value < 2^256, downcast nunca satura de fato
        Some(m) => narrow_saturating(m),
        None => U256::zero(),
    };
    let maximum = narrow_saturating(wide + offset);
    SlippageWindow { minimum, maximum }
}
