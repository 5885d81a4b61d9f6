use course_scaffold::report::{Event, Reporter};
use std::{cell::RefCell, rc::Rc};

/// Collects every event the scaffolder emits, for later inspection.
#[derive(Clone, Default)]
pub struct CaptureReporter(Rc<RefCell<Vec<Event>>>);

impl CaptureReporter {
    #[allow(dead_code)] // Avoid a false positive on the dead code analysis.
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }
}

impl Reporter for CaptureReporter {
    fn name(&self) -> &str {
        "capture"
    }

    fn report(&self, event: &Event) {
        self.0.borrow_mut().push(event.clone());
    }
}
