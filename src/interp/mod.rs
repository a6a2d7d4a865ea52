pub(crate) mod color;
pub(crate) mod transform;
pub(crate) mod value;
