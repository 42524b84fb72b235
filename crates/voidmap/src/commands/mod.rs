pub mod capacity;
pub mod check;
pub mod init;
pub mod map;
pub mod output;
pub mod rect;
