pub(crate) mod error;
pub(crate) mod number;
pub(crate) mod time;
