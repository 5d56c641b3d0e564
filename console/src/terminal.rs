use indexing_console::{IdInput, ToggleButton, StatusIcon, Notifier, UiHandles};
use std::{cell::RefCell, io::Write, rc::Rc};

/// Terminal stand-ins for the page elements.
///
/// The label and icon class live in memory and are echoed to the output
/// (stdout by default) when they change. Alerts go to stderr.
pub struct TerminalUi {
    id: String,
    label: RefCell<String>,
    class: RefCell<Option<String>>,
    out: RefCell<Box<dyn Write>>,
}

impl TerminalUi {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Rc<TerminalUi> {
        TerminalUi::with_output(id, label, Box::new(std::io::stdout()))
    }

    pub fn with_output(id: impl Into<String>, label: impl Into<String>, out: Box<dyn Write>) -> Rc<TerminalUi> {
        Rc::new(TerminalUi {
            id: id.into(),
            label: RefCell::new(label.into()),
            class: RefCell::new(None),
            out: RefCell::new(out),
        })
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

    fn echo(&self, line: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            log::warn!("Failed to write to terminal: {e}");
        }
    }
}

impl IdInput for TerminalUi {
    fn value(&self) -> String {
        self.id.clone()
    }
}

impl ToggleButton for TerminalUi {
    fn label(&self) -> String {
        self.current_label()
    }

    fn set_label(&self, label: &str) {
        if *self.label.borrow() == label {
            return;
        }
        *self.label.borrow_mut() = label.to_string();
        self.echo(&format!("button: {label}"));
    }
}

impl StatusIcon for TerminalUi {
    fn set_class(&self, class: &str) {
        if self.class.borrow().as_deref() == Some(class) {
            return;
        }
        *self.class.borrow_mut() = Some(class.to_string());
        match class {
            "" => self.echo("indicator: none"),
            class => self.echo(&format!("indicator: {class}")),
        }
    }
}

impl Notifier for TerminalUi {
    fn alert(&self, message: &str) {
        eprintln!("alert: {message}");
    }
}
