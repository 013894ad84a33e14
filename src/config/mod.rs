//! Configuration management for the simulation driver

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, LoggingConfig, OutputConfig, Settings, SimulationConfig,
};
