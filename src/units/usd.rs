use std::{fmt::Display, ops::Add};

use serde::Serialize;

use super::GnoNewtype;

/// An amount of USD.
/// Imprecise like the GNO amounts it is converted from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UsdNewtype(pub f64);

impl UsdNewtype {
    pub fn from_gno(GnoNewtype(gno): GnoNewtype, gno_price: f64) -> Self {
        UsdNewtype(gno * gno_price)
    }
}

impl Add for UsdNewtype {
    type Output = Self;

    fn add(self, UsdNewtype(rhs): Self) -> Self::Output {
        let UsdNewtype(lhs) = self;
        UsdNewtype(lhs + rhs)
    }
}

impl Display for UsdNewtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let UsdNewtype(amount) = self;
        write!(f, "${amount:.2}")
    }
}
