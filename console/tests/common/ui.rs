use super::*;
use std::cell::{Cell, RefCell};

/// UI handles that remember what the controller did to them.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub id: RefCell<String>,
    pub label: RefCell<String>,
    pub class: RefCell<String>,
    pub alerts: RefCell<Vec<String>>,
    pub prevented: Cell<usize>,
}

impl RecordingUi {
    pub fn new(id: &str, label: &str) -> Rc<RecordingUi> {
        let ui = RecordingUi::default();
        *ui.id.borrow_mut() = id.to_string();
        *ui.label.borrow_mut() = label.to_string();
        Rc::new(ui)
    }

    pub fn handles(self: &Rc<Self>) -> UiHandles {
        UiHandles {
            id_input: Box::new(Rc::clone(self)),
            button: Box::new(Rc::clone(self)),
            icon: Box::new(Rc::clone(self)),
            notifier: Box::new(Rc::clone(self)),
        }
    }

    pub fn current_label(&self) -> String {
        self.label.borrow().clone()
    }

    pub fn class(&self) -> String {
        self.class.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl IdInput for RecordingUi {
    fn value(&self) -> String {
        self.id.borrow().clone()
    }
}

impl ToggleButton for RecordingUi {
    fn label(&self) -> String {
        self.label.borrow().clone()
    }

    fn set_label(&self, label: &str) {
        *self.label.borrow_mut() = label.to_string();
    }
}

impl StatusIcon for RecordingUi {
    fn set_class(&self, class: &str) {
        *self.class.borrow_mut() = class.to_string();
    }
}

impl Notifier for RecordingUi {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

impl UiEvent for RecordingUi {
    fn prevent_default(&self) {
        self.prevented.set(self.prevented.get() + 1);
    }
}
