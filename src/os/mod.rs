//! Operating system entropy
//!
//! A single platform-independent entry point, [`sys_random`], fills a
//! buffer with kernel randomness. It is used only to seed
//! [`Csprng`](crate::rng::Csprng) when the caller does not supply a seed.
//! The platform backend is selected at compile time.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::sys_random;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::sys_random;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::sys_random;
