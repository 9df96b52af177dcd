pub(crate) mod cache;
pub mod comparator;
