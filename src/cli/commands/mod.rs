//! Command implementations

mod check;
mod content;
mod context;
mod init;
mod theme;

pub use check::check;
pub use content::content;
pub use init::init;
pub use theme::theme;
