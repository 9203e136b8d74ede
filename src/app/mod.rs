//! Application layer: interactive form sessions

mod form_session;

pub use form_session::FormSession;
