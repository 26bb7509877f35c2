//! trade-engine-core — cálculo e validação client-side de trades contra um
//! exchange de produto constante (fee 997/1000) com token resgatável.
//!
//! O core é síncrono e livre de efeitos: cada pipeline é um mapeamento puro
//! de (snapshot, pedido) para resultado, seguro para qualquer número de
//! threads. Leitura on-chain, submissão e UI são colaboradores externos.

pub mod telemetry;
pub mod trade;

pub use trade::types::{U256, U512};
