pub mod ask;
pub mod init;
pub mod price;
pub mod roi;
