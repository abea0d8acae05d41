mod book;
mod client;

pub use self::{book::*, client::*};
