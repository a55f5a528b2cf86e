pub mod email;
pub mod factory;
pub mod push;
pub mod sms;
pub mod social;

pub(crate) mod rules;
