use rust_decimal::{Decimal, RoundingStrategy};

/// Format `value` with exactly two decimals, rounding ties away from zero.
///
/// The tie is decided on the shortest decimal representation of `value`, so
/// `2.675` becomes `2.68` even though the nearest `f64` lies slightly below it.
pub(crate) fn two_decimals(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // magnitudes beyond `Decimal` are whole numbers, no rounding happens there
    match Decimal::from_str_exact(&value.to_string()) {
        Ok(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        Err(_) => format!("{:.2}", value),
    }
}
