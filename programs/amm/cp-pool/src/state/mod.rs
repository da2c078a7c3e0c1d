pub mod epoch;
pub mod fees;
pub mod pool_state;
pub mod status;

pub use epoch::*;
pub use fees::*;
pub use pool_state::*;
pub use status::*;
