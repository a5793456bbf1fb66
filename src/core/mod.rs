pub mod access;
pub mod append;
pub mod charts;
pub mod grouping;
pub mod log;
pub mod logic;
pub mod pairing;
pub mod search;
pub mod table;
pub mod totals;
