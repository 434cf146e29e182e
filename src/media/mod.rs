/// Image intake module
///
/// This module handles:
/// - Decoding whatever image file the owner picked
/// - Downsizing it to the upload bound
/// - Re-encoding it as JPEG and wrapping it in a data URI for upload

pub mod normalize;
