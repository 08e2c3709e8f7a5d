//! Boundary to presentation.
//!
//! Views are flattened into [`SeriesTable`]s; a [`RenderAdapter`] decides how
//! they are drawn or stored. Axis scales, colours and markers live entirely on
//! the adapter side.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::BenchScaleError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub func_name: String,
    pub x: f64,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesTable {
    /// Stable identifier, also used as the artifact name by file sinks.
    pub name: String,
    pub title: String,
    pub x_label: String,
    pub value_label: String,
    pub points: Vec<SeriesPoint>,
}

impl SeriesTable {
    pub fn new(name: &str, title: String, x_label: &str, value_label: &str) -> Self {
        Self {
            name: name.to_string(),
            title,
            x_label: x_label.to_string(),
            value_label: value_label.to_string(),
            points: Vec::new(),
        }
    }

    pub fn push<T: Into<String>>(&mut self, func_name: T, x: impl Into<f64>, value: f64) {
        self.points.push(SeriesPoint {
            func_name: func_name.into(),
            x: x.into(),
            value,
        });
    }

    /// Orders points by function, then x.
    pub fn finish(mut self) -> Self {
        self.points.sort_by(|a, b| {
            a.func_name
                .cmp(&b.func_name)
                .then_with(|| a.x.total_cmp(&b.x))
        });
        self
    }

    pub fn functions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.points.iter().map(|p| p.func_name.as_str()).collect();
        names.dedup();
        names
    }

    pub fn series(&self, func_name: &str) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.func_name == func_name)
            .map(|p| (p.x, p.value))
            .collect()
    }
}

pub trait RenderAdapter {
    fn render(&mut self, table: &SeriesTable) -> Result<(), BenchScaleError>;
}

/// Writes each table as `<name>.json` under a directory.
pub struct JsonDirRenderer {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonDirRenderer {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl RenderAdapter for JsonDirRenderer {
    fn render(&mut self, table: &SeriesTable) -> Result<(), BenchScaleError> {
        fs::create_dir_all(&self.dir).map_err(|e| BenchScaleError::io(e.to_string()))?;
        let path = self.dir.join(format!("{}.json", table.name));
        let data = serde_json::to_vec_pretty(table)
            .map_err(|e| BenchScaleError::invalid_input(e.to_string()))?;
        fs::write(&path, data).map_err(|e| BenchScaleError::io(e.to_string()))?;
        tracing::debug!(path = %path.display(), points = table.points.len(), "wrote table");
        self.written.push(path);
        Ok(())
    }
}

/// Plain-text columns, one block per table.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderAdapter for TextRenderer<W> {
    fn render(&mut self, table: &SeriesTable) -> Result<(), BenchScaleError> {
        let io = |e: std::io::Error| BenchScaleError::io(e.to_string());
        writeln!(self.out, "{}\n{}", table.title, "=".repeat(table.title.len())).map_err(io)?;
        if table.points.is_empty() {
            writeln!(self.out, "(no data)\n").map_err(io)?;
            return Ok(());
        }
        writeln!(
            self.out,
            "{:<32}{:>14}{:>16}",
            "func_name", table.x_label, table.value_label
        )
        .map_err(io)?;
        for point in &table.points {
            writeln!(
                self.out,
                "{:<32}{:>14}{:>16.6}",
                point.func_name, point.x, point.value
            )
            .map_err(io)?;
        }
        writeln!(self.out).map_err(io)
    }
}
