pub mod period;
pub mod table;
