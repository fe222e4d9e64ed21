//! BananaToon: stylize photos into cartoons with Gemini image generation.

pub mod cli;
pub mod config;
pub mod data_url;
pub mod download;
pub mod gemini;
pub mod intake;
pub mod logging;
pub mod mvi;
pub mod studio;
pub mod style;
pub mod ui;
