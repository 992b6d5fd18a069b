use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use matfile::{MatFile, NumericData};
use ndarray::{ArrayD, IxDyn, ShapeBuilder};

use crate::error::{PlotAssistError, Result};

// ---------------------------------------------------------------------------
// MatData – existence-checked view over one loaded .mat file
// ---------------------------------------------------------------------------

/// In-memory view of a MATLAB `.mat` file: variable name → array.
///
/// Parsing of the container format is delegated to the `matfile` crate; this
/// wrapper adds the path-existence check, lookup-by-name with hard failures
/// for absent variables, and an optional visibility filter over variable
/// names.
#[derive(Debug)]
pub struct MatData {
    path: PathBuf,
    mat: MatFile,
    /// When set, only these variable names are visible through `get`/`get_keys`.
    variables: Option<Vec<String>>,
}

impl MatData {
    /// Load a `.mat` file, optionally restricted to the given variable names.
    ///
    /// Fails with [`PlotAssistError::FileNotFound`] when the path does not
    /// exist and [`PlotAssistError::MatParse`] when the contents are not a
    /// readable MAT5 container.
    pub fn load(path: impl AsRef<Path>, variable_names: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(PlotAssistError::FileNotFound { path });
        }

        let file =
            File::open(&path).map_err(|source| PlotAssistError::file_open(path.clone(), source))?;
        let mat = MatFile::parse(file)?;

        Ok(MatData {
            path,
            mat,
            variables: variable_names
                .map(|names| names.iter().map(|name| name.to_string()).collect()),
        })
    }

    /// The backing file path.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// The named variable's raw array. Never defaults: an absent (or
    /// filtered-out) name fails with [`PlotAssistError::VariableNotFound`].
    pub fn get(&self, name: &str) -> Result<&matfile::Array> {
        if !self.is_visible(name) {
            return Err(PlotAssistError::variable_not_found(name, self.path.clone()));
        }
        self.mat
            .find_by_name(name)
            .ok_or_else(|| PlotAssistError::variable_not_found(name, self.path.clone()))
    }

    /// The named variable's real part widened to `f64`, shaped column-major
    /// as declared in the file.
    ///
    /// Every MAT numeric class is widened; 64-bit integer payloads with
    /// magnitudes above 2^53 lose precision in the conversion. Use
    /// [`get`](Self::get) for lossless access to the raw payload.
    pub fn get_f64(&self, name: &str) -> Result<ArrayD<f64>> {
        let array = self.get(name)?;
        let dims: Vec<usize> = array.size().to_vec();
        let data = real_as_f64(array.data());
        Ok(ArrayD::from_shape_vec(IxDyn(&dims).f(), data)?)
    }

    /// Visible variable names, in file order.
    pub fn get_keys(&self) -> Vec<&str> {
        self.mat
            .arrays()
            .iter()
            .map(|array| array.name())
            .filter(|name| self.is_visible(name))
            .collect()
    }

    fn is_visible(&self, name: &str) -> bool {
        match &self.variables {
            Some(list) => list.iter().any(|v| v == name),
            None => true,
        }
    }
}

impl fmt::Display for MatData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MatData:\n\tmat_file={}\n\tkeys={:?}",
            self.path.display(),
            self.get_keys()
        )
    }
}

/// Widen the real part of any MAT numeric payload to `f64`.
fn real_as_f64(data: &NumericData) -> Vec<f64> {
    match data {
        NumericData::Double { real, .. } => real.clone(),
        NumericData::Single { real, .. } => real.iter().map(|&v| f64::from(v)).collect(),
        NumericData::Int8 { real, .. } => real.iter().map(|&v| f64::from(v)).collect(),
        NumericData::UInt8 { real, .. } => real.iter().map(|&v| f64::from(v)).collect(),
        NumericData::Int16 { real, .. } => real.iter().map(|&v| f64::from(v)).collect(),
        NumericData::UInt16 { real, .. } => real.iter().map(|&v| f64::from(v)).collect(),
        NumericData::Int32 { real, .. } => real.iter().map(|&v| f64::from(v)).collect(),
        NumericData::UInt32 { real, .. } => real.iter().map(|&v| f64::from(v)).collect(),
        NumericData::Int64 { real, .. } => real.iter().map(|&v| v as f64).collect(),
        NumericData::UInt64 { real, .. } => real.iter().map(|&v| v as f64).collect(),
    }
}
