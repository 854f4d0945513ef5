#![cfg_attr(not(test), no_std)]

//! Sectioned text pacing: tokenizer, section store with split/merge, and the
//! timed playback state machine that walks one section at a time.

extern crate alloc;

pub mod app;
pub mod content;
pub mod input;
pub mod render;
pub mod text_policy;
