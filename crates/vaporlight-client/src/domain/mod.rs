//! Domain types for the client.
//!
//! Plain data with validation rules and no I/O.  The infrastructure layer
//! fills these structs from files and the command line.

pub mod config;
