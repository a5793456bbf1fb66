use super::{cell::Cell, row_kind::RowKind, worker::Worker};

/// One line of the ledger sheet: an optional detail tag plus one cell per worker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub kind: Option<RowKind>,
    cells: [Cell; 4],
}

impl Row {
    pub fn new(kind: RowKind) -> Self {
        Self {
            kind: Some(kind),
            cells: Default::default(),
        }
    }

    /// A row whose detail label was missing or not recognised.
    pub fn untagged() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for literal ledgers.
    pub fn with(mut self, worker: Worker, cell: impl Into<Cell>) -> Self {
        self.set(worker, cell);
        self
    }

    pub fn get(&self, worker: Worker) -> &Cell {
        &self.cells[worker.index()]
    }

    pub fn set(&mut self, worker: Worker, cell: impl Into<Cell>) {
        self.cells[worker.index()] = cell.into();
    }

    pub fn has_value(&self, worker: Worker) -> bool {
        !self.get(worker).is_empty()
    }

    pub fn is(&self, kind: RowKind) -> bool {
        self.kind == Some(kind)
    }

    /// Cells in sheet column order.
    pub fn cells(&self) -> impl Iterator<Item = (Worker, &Cell)> {
        Worker::ALL.into_iter().zip(self.cells.iter())
    }
}
