pub mod info;
pub mod session;

pub use info::AreaInfo;
pub use session::SessionState;
