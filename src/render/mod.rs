pub(crate) mod cpu;
pub(crate) mod fit;
pub(crate) mod playback;
pub(crate) mod surface;
