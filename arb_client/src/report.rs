//! Human-readable and JSON rendering of one collection run.
use arb_common::{ArbError, ArbitrageResult, AssetPair, EvaluationError, Snapshot, SourceEntry};
use chrono::SecondsFormat;
use serde::Serialize;

/// Text report: one line per source, then the opportunity or the reason there is none.
pub fn render(
    pair: &AssetPair,
    snapshot: &Snapshot,
    outcome: &Result<ArbitrageResult, EvaluationError>,
) -> String {
    let mut lines = vec![format!(
        "{} @ {}",
        pair,
        snapshot.taken_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )];

    for entry in snapshot.entries() {
        match &entry.quote {
            Some(q) if q.is_valid() => {
                lines.push(format!("{}: Bid={}, Ask={}", entry.source, q.bid, q.ask));
            }
            Some(q) => lines.push(format!(
                "{}: ignored (Bid={}, Ask={})",
                entry.source, q.bid, q.ask
            )),
            None => lines.push(format!("{}: unavailable", entry.source)),
        }
    }
    lines.push(String::new());

    match outcome {
        Ok(result) => {
            lines.push(format!(
                "Buy from {} at {} and sell to {} at {}",
                result.buy_source, result.buy_price, result.sell_source, result.sell_price
            ));
            lines.push(format!("Potential profit: {:.2}%", result.profit_percent));
            if result.same_source() {
                lines.push(format!(
                    "Note: best buy and best sell are both on {}",
                    result.buy_source
                ));
            }
            if result.is_profitable {
                lines.push("✓ Profitable arbitrage opportunity exists!".to_string());
            } else {
                lines.push(
                    "✗ No profitable arbitrage opportunity (sell price <= buy price)".to_string(),
                );
            }
        }
        Err(e) => lines.push(format!("Error: {}", capitalize(&e.to_string()))),
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    pair: String,
    taken_at: String,
    sources: &'a [SourceEntry],
    result: Option<&'a ArbitrageResult>,
    error: Option<String>,
}

/// Single-line JSON document with the snapshot and the evaluation outcome.
pub fn render_json(
    pair: &AssetPair,
    snapshot: &Snapshot,
    outcome: &Result<ArbitrageResult, EvaluationError>,
) -> Result<String, ArbError> {
    let report = JsonReport {
        pair: pair.to_string(),
        taken_at: snapshot.taken_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        sources: snapshot.entries(),
        result: outcome.as_ref().ok(),
        error: outcome.as_ref().err().map(|e| e.to_string()),
    };
    Ok(serde_json::to_string(&report)?)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
