mod header;
mod parser;
#[allow(clippy::module_inception)]
mod token;

pub use header::TokenHeader;
pub use parser::{decode_token, split_token, DecodeError, PartialToken};
pub use token::Token;
