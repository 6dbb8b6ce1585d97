pub(crate) mod element;
pub(crate) mod headless;
pub(crate) mod host;
pub(crate) mod timeline;
