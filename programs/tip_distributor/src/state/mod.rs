pub mod claim_state;
pub mod config_state;

pub use claim_state::*;
pub use config_state::*;
