use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use thiserror::Error;

use crate::domain::{Symbol, TickerOption};
use crate::error::ValidationError;

/// Startup-fatal catalog loading errors; the process cannot serve without
/// a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog file malformed: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("catalog row {row} holds an invalid symbol: {source}")]
    BadSymbol {
        row: u64,
        source: ValidationError,
    },

    #[error("catalog contains no ticker rows")]
    Empty,
}

/// Read-only list of selectable tickers, loaded once at startup and held
/// behind `Arc` for the process lifetime.
///
/// Option order is the file order and is stable across calls within one
/// process run.
#[derive(Debug, Clone)]
pub struct SymbolCatalog {
    options: Vec<TickerOption>,
    index: HashMap<Symbol, usize>,
}

impl SymbolCatalog {
    /// Load the catalog from a CSV file with at least `Symbol` and `Name`
    /// columns. Duplicate symbols keep the first row seen.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader.headers()?.clone();
        let symbol_col = column_index(&headers, "Symbol")?;
        let name_col = column_index(&headers, "Name")?;

        let mut options = Vec::new();
        let mut index = HashMap::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let row = row as u64 + 2; // 1-based, after the header line

            let raw_symbol = record.get(symbol_col).unwrap_or_default();
            let symbol = Symbol::parse(raw_symbol)
                .map_err(|source| CatalogError::BadSymbol { row, source })?;
            let name = record.get(name_col).unwrap_or_default().trim();

            if index.contains_key(&symbol) {
                tracing::warn!(%symbol, row, "skipping duplicate catalog row");
                continue;
            }
            index.insert(symbol.clone(), options.len());
            options.push(TickerOption::new(symbol, name));
        }

        if options.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { options, index })
    }

    /// Build a catalog from in-memory options. Duplicates keep the first
    /// entry, mirroring `load`.
    pub fn from_options(entries: impl IntoIterator<Item = TickerOption>) -> Self {
        let mut options = Vec::new();
        let mut index = HashMap::new();
        for entry in entries {
            if index.contains_key(&entry.symbol) {
                continue;
            }
            index.insert(entry.symbol.clone(), options.len());
            options.push(entry);
        }
        Self { options, index }
    }

    pub fn options(&self) -> &[TickerOption] {
        &self.options
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&TickerOption> {
        self.index.get(symbol).map(|&at| &self.options[at])
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

fn column_index(headers: &csv::StringRecord, column: &'static str) -> Result<usize, CatalogError> {
    headers
        .iter()
        .position(|header| header.trim() == column)
        .ok_or(CatalogError::MissingColumn { column })
}
