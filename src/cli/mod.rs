mod commands;
mod server;

pub use commands::{CheckArgs, SearchArgs, check, dataset, search};
pub use server::serve;
