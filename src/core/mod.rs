/// The record capability trait and its field views.
pub mod record;

/// Scalar type set, typed values and the text codec.
pub mod scalar;
