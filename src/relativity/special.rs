//! Special-relativistic transforms in natural units (c = 1).

/// An event in the (1+1)-dimensional lab frame: one spatial and one
/// temporal coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub x: f64,
    pub t: f64,
}

impl Event {
    pub fn new(x: f64, t: f64) -> Self {
        Self { x, t }
    }
}

/// Lorentz factor γ = 1 / sqrt(1 - β²).
///
/// Precondition: |β| < 1. At |β| >= 1 the result is infinite or NaN;
/// callers guard with [`valid_beta`] before reaching this point.
pub fn gamma(beta: f64) -> f64 {
    1.0 / (1.0 - beta * beta).sqrt()
}

/// True when β is a usable boost parameter: finite and strictly inside (-1, 1).
pub fn valid_beta(beta: f64) -> bool {
    beta.is_finite() && beta.abs() < 1.0
}

/// Lorentz boost of a lab-frame event into the frame moving at velocity β:
/// x' = γ(x - βt), t' = γ(t - βx).
pub fn boost(e: Event, beta: f64) -> Event {
    let g = gamma(beta);
    Event {
        x: g * (e.x - beta * e.t),
        t: g * (e.t - beta * e.x),
    }
}

/// Inverse boost, from the moving frame back into the lab frame. Same as
/// [`boost`] with the sign of β flipped.
pub fn unboost(e: Event, beta: f64) -> Event {
    let g = gamma(beta);
    Event {
        x: g * (e.x + beta * e.t),
        t: g * (e.t + beta * e.x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn boost_at_zero_velocity_is_identity() {
        for &(x, t) in &[(0.0, 0.0), (3.5, -2.0), (-17.0, 36.0)] {
            let e = boost(Event::new(x, t), 0.0);
            assert_relative_eq!(e.x, x);
            assert_relative_eq!(e.t, t);
        }
    }

    #[test]
    fn unboost_inverts_boost() {
        for &beta in &[-0.99, -0.5, 0.0, 0.3, 0.8, 0.99] {
            for &(x, t) in &[(1.0, 2.0), (-36.0, 36.0), (0.1, 0.0)] {
                let round = unboost(boost(Event::new(x, t), beta), beta);
                assert_relative_eq!(round.x, x, epsilon = 1e-9);
                assert_relative_eq!(round.t, t, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn light_cone_is_invariant() {
        for &beta in &[-0.9, -0.3, 0.42, 0.8] {
            for &x in &[0.5, 7.0, 36.0] {
                let e = boost(Event::new(x, x), beta);
                assert_relative_eq!(e.t, e.x, epsilon = 1e-9);
                let m = boost(Event::new(-x, x), beta);
                assert_relative_eq!(m.t, -m.x, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn gamma_at_0_6_is_1_25() {
        assert_relative_eq!(gamma(0.6), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn beta_validation_rejects_the_boundary() {
        assert!(valid_beta(0.0));
        assert!(valid_beta(-0.999));
        assert!(!valid_beta(1.0));
        assert!(!valid_beta(-1.0));
        assert!(!valid_beta(f64::NAN));
        assert!(!valid_beta(f64::INFINITY));
    }
}
