pub(crate) mod decode;
pub(crate) mod frames;
pub(crate) mod fs_source;
pub(crate) mod loader;
