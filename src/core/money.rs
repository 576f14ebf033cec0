//! BRL/sats helpers.

/// Display-only exchange rate. The payout always uses the server's
/// `amountSats`, never this.
pub const SATS_PER_BRL: f64 = 300.0;

/// Provisional sats estimate for a still-accumulating total:
/// `floor(total * SATS_PER_BRL)`. Negative input clamps to 0.
pub fn sats_estimate(total_brl: f64) -> u64 {
    let sats = (total_brl * SATS_PER_BRL).floor();
    if sats.is_finite() && sats > 0.0 {
        sats as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_is_floor_of_total_times_rate() {
        assert_eq!(sats_estimate(10.0), 3000);
        assert_eq!(sats_estimate(25.5), 7650);
        assert_eq!(sats_estimate(0.01), 3);
        assert_eq!(sats_estimate(0.0049), 1);
    }

    #[test]
    fn zero_and_garbage_estimate_to_zero() {
        assert_eq!(sats_estimate(0.0), 0);
        assert_eq!(sats_estimate(-5.0), 0);
        assert_eq!(sats_estimate(f64::NAN), 0);
    }
}
