//! Protocol module containing the opcode table, the token, and the command encoder.

pub mod command;
pub mod opcode;
pub mod token;

pub use command::{
    encode_authenticate, encode_set_pixel16, encode_set_pixel8, encode_strobe, Command,
};
pub use opcode::{Opcode, ProtocolError};
pub use token::{Token, TOKEN_LEN};
