pub(crate) mod feature;
pub(crate) mod progress;
pub(crate) mod text;
