pub mod claim;
pub mod initialize;
pub mod top_up;

pub use claim::*;
pub use initialize::*;
pub use top_up::*;
