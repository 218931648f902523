mod api;
mod client;

pub use {api::*, client::*};
