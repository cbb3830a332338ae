//! Per-entity page glue: forms, column factories and dialog factories for
//! each of the three admin screens. The generic flow behind them lives in
//! `table-framework`.

pub mod categories;
pub mod orders;
pub mod products;
