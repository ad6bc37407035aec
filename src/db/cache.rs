//! Short-lived read cache in front of a worksheet.
//!
//! CLI commands read a sheet once per process, so there the cache only
//! bounds staleness. It saves store reads for callers that keep one sheet
//! open across several interactions.

use crate::db::sheet::Worksheet;
use crate::errors::AppResult;
use std::time::{Duration, Instant};

pub struct CachedSheet<W: Worksheet> {
    inner: W,
    ttl: Duration,
    cached: Option<(Instant, Vec<Vec<String>>)>,
}

impl<W: Worksheet> CachedSheet<W> {
    pub fn new(inner: W, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: None,
        }
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_warm(&self) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|(at, _)| at.elapsed() < self.ttl)
    }
}

impl<W: Worksheet> Worksheet for CachedSheet<W> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn header(&self) -> &[&'static str] {
        self.inner.header()
    }

    fn append_row(&mut self, cells: &[String]) -> AppResult<()> {
        self.inner.append_row(cells)?;
        self.invalidate();
        Ok(())
    }

    fn get_all_rows(&mut self) -> AppResult<Vec<Vec<String>>> {
        if self.is_warm()
            && let Some((_, rows)) = &self.cached
        {
            return Ok(rows.clone());
        }

        let rows = self.inner.get_all_rows()?;
        self.cached = Some((Instant::now(), rows.clone()));
        Ok(rows)
    }

    fn update_row(&mut self, row: usize, first_col: usize, values: &[String]) -> AppResult<()> {
        self.inner.update_row(row, first_col, values)?;
        self.invalidate();
        Ok(())
    }

    fn delete_row(&mut self, row: usize) -> AppResult<()> {
        self.inner.delete_row(row)?;
        self.invalidate();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use std::cell::Cell;
    use std::rc::Rc;

    /// In-memory sheet counting how often it is read.
    struct CountingSheet {
        rows: Vec<Vec<String>>,
        reads: Rc<Cell<usize>>,
    }

    impl Worksheet for CountingSheet {
        fn name(&self) -> &str {
            "counting"
        }
        fn header(&self) -> &[&'static str] {
            &["a"]
        }
        fn append_row(&mut self, cells: &[String]) -> AppResult<()> {
            self.rows.push(cells.to_vec());
            Ok(())
        }
        fn get_all_rows(&mut self) -> AppResult<Vec<Vec<String>>> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.rows.clone())
        }
        fn update_row(&mut self, row: usize, first_col: usize, values: &[String]) -> AppResult<()> {
            let r = self
                .rows
                .get_mut(row - 2)
                .ok_or(AppError::InvalidRowPosition(row))?;
            r[first_col - 1..first_col - 1 + values.len()].clone_from_slice(values);
            Ok(())
        }
        fn delete_row(&mut self, row: usize) -> AppResult<()> {
            self.rows.remove(row - 2);
            Ok(())
        }
    }

    fn counting() -> (CountingSheet, Rc<Cell<usize>>) {
        let reads = Rc::new(Cell::new(0));
        (
            CountingSheet {
                rows: vec![vec!["x".into()]],
                reads: Rc::clone(&reads),
            },
            reads,
        )
    }

    #[test]
    fn reads_are_reused_within_ttl() {
        let (sheet, reads) = counting();
        let mut cached = CachedSheet::new(sheet, Duration::from_secs(60));
        cached.get_all_rows().unwrap();
        cached.get_all_rows().unwrap();
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn mutations_invalidate_the_cache() {
        let (sheet, reads) = counting();
        let mut cached = CachedSheet::new(sheet, Duration::from_secs(60));
        cached.get_all_rows().unwrap();
        cached.append_row(&["y".to_string()]).unwrap();
        assert!(!cached.is_warm());

        let rows = cached.get_all_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn zero_ttl_never_reuses() {
        let (sheet, reads) = counting();
        let mut cached = CachedSheet::new(sheet, Duration::ZERO);
        cached.get_all_rows().unwrap();
        cached.get_all_rows().unwrap();
        assert_eq!(reads.get(), 2);
    }
}
