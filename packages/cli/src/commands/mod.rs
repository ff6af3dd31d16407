pub mod comments;
pub mod font_size;
pub mod init;
pub mod typography;

pub use comments::{comments, CommentsArgs};
pub use font_size::{font_size, FontSizeArgs};
pub use init::{init, InitArgs};
pub use typography::{typography, TypographyArgs};
