//! Probability ⇄ log-odds conversions.
//!
//! ```text
//! L(p) = ln(p / (1 - p))        p ∈ [0, 1]
//! P(L) = e^L / (1 + e^L)        L ∈ [-∞, +∞]
//! ```
//!
//! The endpoints map exactly: `p = 0 ↔ -∞` and `p = 1 ↔ +∞`.

/// Convert a probability to log-odds.
pub fn to_log_odds(probability: f32) -> f32 {
    if probability == 0.0 {
        f32::NEG_INFINITY
    } else if probability == 1.0 {
        f32::INFINITY
    } else {
        (probability / (1.0 - probability)).ln()
    }
}

/// Convert log-odds to a probability.
pub fn to_probability(log_odds: f32) -> f32 {
    if log_odds == f32::NEG_INFINITY {
        0.0
    } else if log_odds == f32::INFINITY {
        1.0
    } else {
        let odds = log_odds.exp();
        // exp overflows to +inf well before L reaches f32::MAX
        if odds.is_infinite() {
            1.0
        } else {
            odds / (1.0 + odds)
        }
    }
}
