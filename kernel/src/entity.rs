mod book;
mod client;
mod order;
mod purchase;

pub use self::{book::*, client::*, order::*, purchase::*};
