pub mod cell;
pub mod entry;
pub mod row;
pub mod row_kind;
pub mod session;
pub mod totals;
pub mod worker;
