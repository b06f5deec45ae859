//! Infrastructure: the socket-owning controller and config file storage.

pub mod config_file;
pub mod controller;
