mod command_result;
pub mod extract;
pub mod init;
pub mod translate;

pub use command_result::*;
