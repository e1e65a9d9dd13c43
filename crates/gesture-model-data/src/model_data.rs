// Generated by `gesture-edge generate`. Do not edit by hand.
//
// Source artifact: gesture_recognition.tflite

/// The raw gesture recognition model data
/// This uses a static include_bytes! macro to embed the model data
/// at compile time, ensuring it's always available
pub const GESTURE_MODEL_DATA: &[u8] = include_bytes!("../models/gesture_recognition.tflite");

/// Declared byte length of [`GESTURE_MODEL_DATA`], written by the generator
/// from the source artifact's extent
pub const GESTURE_MODEL_DATA_LEN: usize = 960;
