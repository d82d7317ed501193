//! Editor-facing side of the engine: tokens, the line lexer, and the
//! session/buffer traits a hosting editor implements.

mod lexer;
mod session;
mod token;

pub use lexer::LineLexer;
pub use session::{EditableBuffer, EditorSession, TextBuffer, TextSession};
pub use token::{Token, TokenRole};
