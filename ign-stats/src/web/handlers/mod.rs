pub(crate) mod misc;
pub(crate) mod pages;
