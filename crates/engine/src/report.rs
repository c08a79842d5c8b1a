use common::{Signal, Suggestion};

/// Render a signal as a Telegram Markdown message.
pub fn format_report(signal: &Signal) -> String {
    let headline = match signal.suggestion {
        Suggestion::BuyCall => "📈 *Suggestion: BUY CALL*",
        Suggestion::BuyPut => "📉 *Suggestion: BUY PUT*",
        Suggestion::Neutral => "⚖️ *Suggestion: NEUTRAL*",
    };
    let r = &signal.reasoning;

    format!(
        "{headline}\n\n\
         📊 *Reasoning:*\n\
         • Candle: {}\n\
         • Volume Trend: {}\n\
         • Zone: {}\n\
         • Option Chain: {}\n\
         🕒 Time: {}",
        r.candle,
        r.volume_trend,
        r.zone,
        r.option_bias.label(),
        signal.generated_at.format("%Y-%m-%d %H:%M"),
    )
}
