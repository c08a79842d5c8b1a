use tracing::{debug, warn};

use common::{BiasReading, Error, OptionBias, OptionChain, OptionChainProvider, OptionLeg, Result};

/// Read the option-chain bias for `symbol`.
///
/// Never fails: fetch and parse errors are logged and reported as
/// `BiasReading::Unavailable`, which scores as `Neutral`.
pub async fn read_option_bias(provider: &dyn OptionChainProvider, symbol: &str) -> BiasReading {
    let outcome = match provider.fetch_chain(symbol).await {
        Ok(chain) => option_bias(&chain),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(bias) => {
            debug!(symbol, bias = %bias, "Option chain bias computed");
            BiasReading::Computed(bias)
        }
        Err(e) => {
            warn!(symbol, error = %e, "Option chain fetch failed, defaulting to Neutral");
            BiasReading::Unavailable { reason: e.to_string() }
        }
    }
}

/// Compare the OI change at the highest-OI call strike with the one at the
/// highest-OI put strike. Put writers adding more than call writers is read
/// as support for calls.
pub fn option_bias(chain: &OptionChain) -> Result<OptionBias> {
    let top_call = max_open_interest(chain.rows.iter().filter_map(|r| r.call.as_ref()))
        .ok_or_else(|| Error::Provider(format!("no call open interest for {}", chain.symbol)))?;
    let top_put = max_open_interest(chain.rows.iter().filter_map(|r| r.put.as_ref()))
        .ok_or_else(|| Error::Provider(format!("no put open interest for {}", chain.symbol)))?;

    let call_change = top_call.change_in_open_interest;
    let put_change = top_put.change_in_open_interest;

    Ok(if put_change > call_change {
        OptionBias::CallBias
    } else if call_change > put_change {
        OptionBias::PutBias
    } else {
        OptionBias::Neutral
    })
}

/// Leg with the largest non-zero open interest; the earliest wins ties.
fn max_open_interest<'a>(legs: impl Iterator<Item = &'a OptionLeg>) -> Option<&'a OptionLeg> {
    legs.filter(|leg| leg.open_interest != 0.0)
        .fold(None, |best: Option<&OptionLeg>, leg| match best {
            Some(b) if b.open_interest >= leg.open_interest => Some(b),
            _ => Some(leg),
        })
}
