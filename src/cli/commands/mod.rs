pub mod catalog;
pub mod complete;
pub mod info;
pub mod read;
pub mod verify;
