//! Núcleo de cálculo e validação de trades contra um pool de produto
//! constante pareado com um token resgatável. Puro e determinístico:
//! snapshot + pedido entram, resultado sai; nenhum I/O, cache ou relógio.

pub mod types;
pub mod units;
pub mod guardrails;
pub mod pricing;
pub mod slippage;
pub mod gas;
pub mod validate;

// módulos unificados de erro
pub mod error_catalog;
pub mod error;
pub mod error_map;

// oráculo de alta precisão (só testes/goldens)
pub mod ref_golden;
