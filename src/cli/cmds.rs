pub mod cats;
pub mod export;
pub mod init;
pub mod log;
pub mod root;
pub mod sum;
pub mod view;
