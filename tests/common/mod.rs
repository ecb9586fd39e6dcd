#![allow(dead_code)]

pub mod memory;
pub mod stub_server;

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

pub use memory::MemoryGateway;
pub use stub_server::{Route, StubServer};

/// Runs the `palletctl` binary with an isolated config file
pub struct PalletctlTest {
    pub temp_dir: TempDir,
    binary_path: PathBuf,
}

impl PalletctlTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        PalletctlTest {
            temp_dir,
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_palletctl")),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("PALLETCTL_CONFIG", self.config_path())
            .env_remove("PALLETCTL_API_BASE")
            .env_remove("PALLETCTL_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute palletctl")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

impl Default for PalletctlTest {
    fn default() -> Self {
        Self::new()
    }
}
