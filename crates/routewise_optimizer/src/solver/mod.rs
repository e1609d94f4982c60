pub mod combination;
pub mod feasibility;
pub mod objective;
pub mod optimizer;
pub mod optimizer_params;
pub mod option_analysis;
pub mod outcome;
pub mod ranking;
pub mod recommendation;
pub mod request;
pub mod trade_off;
