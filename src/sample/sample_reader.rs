use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashSet;

use crate::{Error, Result};
use super::attribute::Attribute;
use super::instance::{Instance, MISSING};
use super::sample_struct::Sample;


/// The token that marks a missing value.
const MISSING_TOKEN: &str = "?";


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
///
/// A column is read as a nominal attribute if it is declared with
/// [`SampleReader::nominal`] or if one of its entries is not a number.
/// The values of a nominal attribute are listed in order of first
/// appearance. Empty entries and `?` are read as missing values.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minitrees::prelude::*;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .class_column("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    class_column: Option<String>,
    nominal: HashSet<String>,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            class_column: None,
            nominal: HashSet::new(),
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    /// Without a header, the columns are named `Attr. [i]`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is used for the class.
    /// Default is the last column.
    pub fn class_column<S: ToString>(mut self, column: S) -> Self {
        self.class_column = Some(column.to_string());
        self
    }


    /// Declare the column `column` as nominal,
    /// even if all of its entries are numbers.
    pub fn nominal<S: ToString>(mut self, column: S) -> Self {
        self.nominal.insert(column.to_string());
        self
    }


    /// Reads a CSV text from `reader`.
    /// This method consumes `self.`
    pub fn read_from<R: BufRead>(self, reader: R) -> Result<Sample> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            let tokens = line.split(',')
                .map(|token| token.trim().to_string())
                .collect::<Vec<_>>();
            lines.push(tokens);
        }

        let mut lines = lines.into_iter();
        let names = if self.has_header {
            lines.next()
                .ok_or_else(|| Error::invalid("the header row is missing"))?
        } else {
            Vec::new()
        };
        let rows = lines.collect::<Vec<_>>();

        let n_columns = if self.has_header {
            names.len()
        } else {
            rows.first().map(|row| row.len()).unwrap_or(0)
        };
        let names = if self.has_header {
            names
        } else {
            (0..n_columns).map(|i| format!("Attr. [{i}]")).collect()
        };
        if n_columns == 0 {
            return Err(Error::invalid("the file has no column"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_columns {
                let msg = format!(
                    "row {i} has {} entries, but {n_columns} are expected",
                    row.len()
                );
                return Err(Error::invalid(msg));
            }
        }

        let class_index = match &self.class_column {
            Some(column) => names.iter()
                .position(|name| name == column)
                .ok_or_else(|| {
                    Error::invalid(format!("no column named `{column}`"))
                })?,
            None => n_columns - 1,
        };

        let mut attributes = names.iter()
            .enumerate()
            .map(|(j, name)| {
                let numeric = !self.nominal.contains(name)
                    && rows.iter().all(|row| {
                        is_missing(&row[j]) || row[j].parse::<f64>().is_ok()
                    });
                if numeric {
                    Attribute::numeric(name)
                } else {
                    Attribute::nominal(name, Vec::<String>::new())
                }
            })
            .collect::<Vec<_>>();

        let mut instances = Vec::with_capacity(rows.len());
        for row in rows.iter() {
            let values = row.iter()
                .zip(attributes.iter_mut())
                .map(|(token, attribute)| parse_value(token, attribute))
                .collect::<Vec<_>>();
            instances.push(Instance::new(values));
        }

        let mut sample = Sample::new(attributes, class_index)?;
        for instance in instances {
            sample.push(instance)?;
        }
        Ok(sample)
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(mut self) -> Result<Sample> {
        let file = self.file.take()
            .ok_or_else(|| {
                Error::invalid("the file name for csv is not set")
            })?;
        let reader = BufReader::new(File::open(file)?);
        self.read_from(reader)
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


fn is_missing(token: &str) -> bool {
    token.is_empty() || token == MISSING_TOKEN
}


fn parse_value(token: &str, attribute: &mut Attribute) -> f64 {
    if is_missing(token) {
        return MISSING;
    }
    if attribute.is_nominal() {
        attribute.code_or_push(token)
            .map(|code| code as f64)
            .unwrap_or(MISSING)
    } else {
        token.parse::<f64>().unwrap_or(MISSING)
    }
}
