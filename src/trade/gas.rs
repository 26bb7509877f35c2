//! Política de gas: margem sobre o limit estimado, multiplicador sobre o
//! price corrente e deadline aritmético. Funções puras; quem resubmete e
//! re-cota é o submissor externo.

use crate::trade::types::{Bips, Gas, BIPS_SCALE, DEADLINE_FROM_NOW};

/// Limit com folga: `estimate + estimate·margin/10000` (10% no default do
/// protocolo). Satura em vez de estourar.
pub fn margined_limit(estimate: Gas, margin_bips: Bips) -> Gas {
    let offset = estimate.saturating_mul(Gas::from(margin_bips)) / Gas::from(BIPS_SCALE);
    estimate.saturating_add(offset)
}

/// Price com folga: `current·multiplier/100` (150% no default do protocolo).
/// Satura em `Gas::MAX` — saturar o produto antes da divisão devolveria
/// menos que o próprio input para valores grandes.
pub fn margined_price(current: Gas, multiplier_pct: u32) -> Gas {
    current
        .checked_mul(Gas::from(multiplier_pct))
        .map(|v| v / 100)
        .unwrap_or(Gas::MAX)
}

/// Deadline on-chain: `now + 15 min`. Entregue ao submissor, não imposto aqui.
pub fn deadline(now_unix: u64) -> u64 {
    now_unix.saturating_add(DEADLINE_FROM_NOW)
}
