// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Plotedit: replay a scene file through the edit tool

use anyhow::{Context, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    plotedit::init_tracing();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: plotedit <scene.toml>")?;
    let output = plotedit::run(&path)?;
    println!("{output}");
    Ok(())
}
