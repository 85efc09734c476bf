//! Response payloads and the message rules behind them

pub mod greeting;
pub mod responses;
