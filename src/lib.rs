pub mod atom;
pub mod constants;
pub mod diagram;
pub mod element;
pub mod error;
pub mod series;
pub mod table;
pub mod unit;

pub use atom::BohrAtom;
pub use error::BohrError;
pub use unit::EnergyUnit;
