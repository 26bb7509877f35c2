use anyhow::Result;
use tracing::info;

use trade_engine_core::trade::types::{Reserves, WAD};
use trade_engine_core::trade::units::format_units;
use trade_engine_core::trade::validate::{validate_buy, CounterAsset, Snapshot};
use trade_engine_core::{telemetry, U256};

fn wad(n: u128) -> U256 {
    U256::from(n) * U256::from(WAD)
}

fn main() -> Result<()> {
    let tel = telemetry::init("trade-engine-core")?;

    let span = telemetry::make_info_span("validate_buy", 1, "telemetry_smoke");
    let _e = span.enter();

    // snapshot de exemplo: pool 500 ETH / 241 tokens, pagando em ETH
    let snapshot = Snapshot {
        counter: CounterAsset::Eth,
        base_reserves: Reserves::new(wad(500), wad(241)),
        counter_reserves: None,
        eth_balance: Some(wad(3)),
        base_balance: Some(wad(0)),
        counter_balance: Some(wad(3)),
        exchange_allowance: None,
        counter_allowance: None,
        redeem_allowance: None,
    };

    let result = telemetry::time("validate_buy", || validate_buy(&snapshot, "1"))?;
    info!(
        input = %format_units(result.input_value),
        max_input = %format_units(result.maximum_input_value.unwrap_or_default()),
        output = %format_units(result.output_value),
        "cotação emitida"
    );
    if let Some(err) = &result.error {
        info!(error = %err.to_log_json(), "erro soft anexado");
    }

    tel.validate_latency_ms.record(0.1, &[]);
    std::thread::sleep(std::time::Duration::from_millis(200));
    tel.shutdown();
    Ok(())
}
