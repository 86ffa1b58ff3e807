pub mod baseline;
pub mod clock;
pub mod collections;
pub mod language;
