pub mod posting;
pub mod skill;
pub mod ranking;
pub mod report;

pub use posting::*;
pub use skill::*;
pub use ranking::*;
pub use report::*;
