use common::{CandlePattern, OptionBias, Reasoning, Score, Suggestion, VolumeTrend, Zone};

/// Award each detector's point to at most one side.
pub fn tally(reasoning: &Reasoning) -> Score {
    let mut score = Score::default();

    match reasoning.volume_trend {
        VolumeTrend::StrongUptrend => score.call += 1,
        VolumeTrend::StrongDowntrend => score.put += 1,
        VolumeTrend::WeakUptrend | VolumeTrend::WeakDowntrend | VolumeTrend::Neutral => {}
    }
    match reasoning.candle {
        CandlePattern::BullishEngulfing => score.call += 1,
        CandlePattern::BearishEngulfing => score.put += 1,
        CandlePattern::Doji | CandlePattern::NoPattern => {}
    }
    match reasoning.zone {
        Zone::NearSupport => score.call += 1,
        Zone::NearResistance => score.put += 1,
        Zone::MiddleZone => {}
    }
    match reasoning.option_bias.label() {
        OptionBias::CallBias => score.call += 1,
        OptionBias::PutBias => score.put += 1,
        OptionBias::Neutral => {}
    }

    score
}

/// A side wins only with at least `min_score` points and a strict lead.
pub fn decide(score: Score, min_score: u8) -> Suggestion {
    if score.call >= min_score && score.call > score.put {
        Suggestion::BuyCall
    } else if score.put >= min_score && score.put > score.call {
        Suggestion::BuyPut
    } else {
        Suggestion::Neutral
    }
}
