pub(crate) mod chart;
pub(crate) mod standard;
pub(crate) mod timing;
