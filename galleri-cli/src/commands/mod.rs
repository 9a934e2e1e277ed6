pub(crate) mod browse;
pub(crate) mod categories;
pub(crate) mod config;
pub(crate) mod featured;
pub(crate) mod related;
pub(crate) mod show;
pub(crate) mod sync;
