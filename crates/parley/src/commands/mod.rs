pub mod diagnostic;
pub mod init;
pub mod plugins;
pub mod run;
pub mod version;
