pub(crate) mod diagnostics;
pub(crate) mod script;
pub(crate) mod url;
