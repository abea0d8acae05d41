mod book;
mod client;
mod purchase;

pub use self::{book::*, client::*, purchase::*};
