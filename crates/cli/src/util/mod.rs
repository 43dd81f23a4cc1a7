// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{
    fs::File,
    io::{BufWriter, Write, stdout},
    path::Path,
};

use anyhow::{Result, anyhow};
use serde::Serialize;

pub fn open_file_for_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(output) => {
            let file = File::create(output)
                .map_err(|e| anyhow!("Failed to create '{}': {}", output.display(), e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(stdout())),
    }
}

/// Write `value` as pretty-printed JSON to the output file, or stdout if none is given.
pub fn write_json(output: Option<&Path>, value: &impl Serialize) -> Result<()> {
    let mut writer = open_file_for_output(output)?;

    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
