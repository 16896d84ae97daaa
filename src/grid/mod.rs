pub(crate) mod layout;
pub(crate) mod reveal;
pub(crate) mod store;
