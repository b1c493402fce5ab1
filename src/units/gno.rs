use std::{
    fmt,
    iter::Sum,
    ops::{Add, Mul, Sub},
};

use serde::{Deserialize, Serialize};

use super::UsdNewtype;

/// An amount of GNO, the staking token validators are funded with.
/// Fixture balances are fractional and only ever summed or averaged for display, so an imprecise
/// f64 is enough here.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GnoNewtype(pub f64);

impl GnoNewtype {
    pub const ZERO: GnoNewtype = GnoNewtype(0.0);

    pub fn to_usd(self, gno_price: f64) -> UsdNewtype {
        UsdNewtype::from_gno(self, gno_price)
    }
}

impl fmt::Display for GnoNewtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let GnoNewtype(amount) = self;
        write!(f, "{amount:.2} GNO")
    }
}

impl Add for GnoNewtype {
    type Output = Self;

    fn add(self, GnoNewtype(rhs): Self) -> Self::Output {
        let GnoNewtype(lhs) = self;
        GnoNewtype(lhs + rhs)
    }
}

impl Sub for GnoNewtype {
    type Output = Self;

    fn sub(self, GnoNewtype(rhs): Self) -> Self::Output {
        let GnoNewtype(lhs) = self;
        GnoNewtype(lhs - rhs)
    }
}

impl Mul<f64> for GnoNewtype {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        let GnoNewtype(lhs) = self;
        GnoNewtype(lhs * rhs)
    }
}

impl Sum for GnoNewtype {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(GnoNewtype::ZERO, |sum, amount| sum + amount)
    }
}

impl<'a> Sum<&'a GnoNewtype> for GnoNewtype {
    fn sum<I: Iterator<Item = &'a GnoNewtype>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<f64> for GnoNewtype {
    fn from(amount: f64) -> Self {
        GnoNewtype(amount)
    }
}

impl From<GnoNewtype> for f64 {
    fn from(GnoNewtype(amount): GnoNewtype) -> Self {
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gno_add_test() {
        assert_eq!(GnoNewtype(1.5) + GnoNewtype(1.0), GnoNewtype(2.5));
    }

    #[test]
    fn gno_sum_test() {
        let amounts = vec![GnoNewtype(1.0), GnoNewtype(2.0), GnoNewtype(0.5)];
        assert_eq!(amounts.iter().sum::<GnoNewtype>(), GnoNewtype(3.5));
        assert_eq!(Vec::<GnoNewtype>::new().into_iter().sum::<GnoNewtype>(), GnoNewtype::ZERO);
    }

    #[test]
    fn gno_display_test() {
        assert_eq!(GnoNewtype(32.0).to_string(), "32.00 GNO");
    }

    #[test]
    fn deserialize_plain_number_test() {
        let amount: GnoNewtype = serde_json::from_str("32.125").unwrap();
        assert_eq!(amount, GnoNewtype(32.125));
    }
}
