use crate::prelude::*;

pub const START_LABEL: &str = "Start indexing";
pub const STOP_LABEL: &str = "Stop indexing";

/// The action the toggle button currently offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexingAction {
    Start,
    Stop,
}

impl IndexingAction {
    /// Only the exact start label means [`IndexingAction::Start`].
    pub fn from_label(label: &str) -> IndexingAction {
        match label {
            START_LABEL => IndexingAction::Start,
            _ => IndexingAction::Stop,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IndexingAction::Start => START_LABEL,
            IndexingAction::Stop => STOP_LABEL,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            IndexingAction::Start => "/api/startIndexing",
            IndexingAction::Stop => "/api/stopIndexing",
        }
    }

    pub fn toggled(self) -> IndexingAction {
        match self {
            IndexingAction::Start => IndexingAction::Stop,
            IndexingAction::Stop => IndexingAction::Start,
        }
    }
}

impl fmt::Display for IndexingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexingAction::Start => write!(f, "start"),
            IndexingAction::Stop => write!(f, "stop"),
        }
    }
}

/// Form field holding the identifier of the indexing target.
pub trait IdInput {
    fn value(&self) -> String;
}

pub trait ToggleButton {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
}

pub trait StatusIcon {
    fn set_class(&self, class: &str);
}

/// Blocking, user-facing notification.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// The interaction that triggered a toggle.
pub trait UiEvent {
    fn prevent_default(&self);
}

impl UiEvent for () {
    fn prevent_default(&self) {}
}

// Front-ends keep a handle on their elements while the controller owns boxed clones.

impl<T: IdInput + ?Sized> IdInput for Rc<T> {
    fn value(&self) -> String {
        (**self).value()
    }
}

impl<T: ToggleButton + ?Sized> ToggleButton for Rc<T> {
    fn label(&self) -> String {
        (**self).label()
    }

    fn set_label(&self, label: &str) {
        (**self).set_label(label)
    }
}

impl<T: StatusIcon + ?Sized> StatusIcon for Rc<T> {
    fn set_class(&self, class: &str) {
        (**self).set_class(class)
    }
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

impl<T: UiEvent + ?Sized> UiEvent for Rc<T> {
    fn prevent_default(&self) {
        (**self).prevent_default()
    }
}

/// Elements the controller reads from and writes to.
pub struct UiHandles {
    pub id_input: Box<dyn IdInput>,
    pub button: Box<dyn ToggleButton>,
    pub icon: Box<dyn StatusIcon>,
    pub notifier: Box<dyn Notifier>,
}
