//! # Repository Module
//!
//! Repository implementations over the SQLite pool.
//!
//! ```text
//! repository/
//! ├── mod.rs       ◄─── You are here (exports)
//! └── settings.rs  ◄─── String key-value settings
//! ```

pub mod settings;
