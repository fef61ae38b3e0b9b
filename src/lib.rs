pub mod body;
pub mod err;
pub mod fallback;
pub mod handler;
pub mod http;
pub mod redirect;
pub mod rules;

mod tcp;

pub use handler::{handler_fn, Handler};
pub use redirect::Redirector;
pub use rules::{RuleParseError, Rules};
