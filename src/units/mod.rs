mod gno;
mod usd;

pub use gno::GnoNewtype;
pub use usd::UsdNewtype;
