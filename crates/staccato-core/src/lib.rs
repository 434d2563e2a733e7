//! Staccato Core - real-time audio primitives for embedded DSP
//!
//! This crate provides the building blocks an audio callback needs between a
//! DAC driver and the signal chain, designed for processing with zero
//! allocation after construction.
//!
//! # Core Abstractions
//!
//! ## Containers
//!
//! - [`RingBuffer`] - Fixed-capacity FIFO with a compile-time overflow policy
//!   ([`Overwrite`] or [`Discard`])
//! - [`AudioBuffer`] - Fixed-size multichannel sample block
//!
//! ## Function Evaluation
//!
//! - [`LookupTable`] - Precomputed function with linear interpolation and
//!   configurable [`EdgeBehavior`]
//!
//! ## Parameter Smoothing
//!
//! - [`Parameter`] - Linear ramp between control values, retriggerable
//!   without discontinuities
//!
//! ## Processing
//!
//! - [`AudioModule`] - Object-safe trait for block processors
//! - [`ModuleExt`] / [`Chain`] - Static module chaining
//! - [`SmoothedGain`] - Reference module applying a smoothed gain
//! - [`AudioContext`] / [`StreamContext`] - Sample rate and block size
//!
//! ## Utilities
//!
//! - Math functions: [`lerp`], [`linear_map`], [`clip`], [`db_to_linear`], etc.
//! - [`Sample`] - Numeric formats usable in buffers and parameters
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! staccato-core = { version = "0.1", default-features = false }
//! ```
//!
//! The optional `tracing` feature emits debug events when tables and
//! parameters are configured. Nothing is logged from processing paths.
//!
//! # Example
//!
//! ```rust
//! use staccato_core::{
//!     AudioBuffer, AudioModule, EdgeBehavior, LookupTable, Parameter, SmoothedGain,
//!     StreamContext,
//! };
//!
//! const SAMPLE_RATE: f32 = 48000.0;
//!
//! // One period of a sine, wrapped for an oscillator phase.
//! let sine = LookupTable::<256>::new(
//!     libm::sinf,
//!     0.0,
//!     core::f32::consts::TAU,
//!     EdgeBehavior::Periodic,
//! );
//! let mut frequency = Parameter::with_transition_time(440.0_f32, 0.005, SAMPLE_RATE);
//! let mut phase = 0.0_f32;
//!
//! let mut level = SmoothedGain::new(0.25);
//! AudioModule::<1, 64>::prepare(&mut level, &StreamContext::new(SAMPLE_RATE, 64));
//!
//! let mut block: AudioBuffer<f32, 1, 64> = AudioBuffer::new();
//! frequency.set_value(880.0);
//! for sample in block.channel_mut(0) {
//!     *sample = sine.eval(phase);
//!     phase += core::f32::consts::TAU * frequency.advance() / SAMPLE_RATE;
//! }
//! level.process(&mut block);
//! assert!(block.channel(0).iter().all(|s| s.abs() <= 0.25 + 1e-6));
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations, no locks, O(1) per sample
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Compile-time shapes**: Capacities, table sizes and block formats are
//!   const generics

#![cfg_attr(not(feature = "std"), no_std)]

pub mod audio_buffer;
pub mod context;
pub mod gain;
pub mod lookup_table;
pub mod math;
pub mod module;
pub mod parameter;
pub mod ring_buffer;

// Re-export main types at crate root
pub use audio_buffer::AudioBuffer;
pub use context::{
    AudioContext, DEFAULT_BIT_DEPTH, DEFAULT_BLOCK_SIZE, DEFAULT_SAMPLE_RATE, StreamContext,
};
pub use gain::{DEFAULT_GAIN_TRANSITION, GAIN_MAX_DB, GAIN_MIN_DB, SmoothedGain};
pub use lookup_table::{EdgeBehavior, LookupTable};
pub use math::{
    Sample, clip, db_to_linear, lerp, linear_map, linear_to_db, ms_to_samples,
    seconds_to_samples,
};
pub use module::{AudioModule, Chain, ModuleExt};
pub use parameter::{DEFAULT_TRANSITION_SAMPLES, Parameter};
pub use ring_buffer::{Cursor, Discard, Iter, OverflowKind, OverflowPolicy, Overwrite, RingBuffer};
