pub mod icon;
pub mod tts;
