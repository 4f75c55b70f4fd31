use std::collections::HashSet;

use crate::model::record::RecordId;

/// A control that can be waiting on a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Control {
    CreateSubmit,
    Update(RecordId),
    Delete(RecordId),
}

/// Controls with a request in flight.
///
/// A busy control is rendered disabled with a busy label; a second click on
/// it is ignored until its request settles. Other controls stay live.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusyControls {
    controls: HashSet<Control>,
}

impl BusyControls {
    /// Marks `control` busy. Returns `false` when it already was, in which
    /// case the caller must not start another request.
    pub fn begin(&mut self, control: Control) -> bool {
        self.controls.insert(control)
    }

    pub fn finish(&mut self, control: &Control) {
        self.controls.remove(control);
    }

    pub fn is_busy(&self, control: &Control) -> bool {
        self.controls.contains(control)
    }

    pub fn clear(&mut self) {
        self.controls.clear();
    }
}
