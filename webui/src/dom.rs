use crate::prelude::*;

#[derive(Debug)]
pub enum DomError {
    NoDocument,
    Missing(&'static str),
    WrongType(&'static str),
    Js(JsValue),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::NoDocument => write!(f, "NoDocument"),
            DomError::Missing(selector) => write!(f, "Missing element: {selector}"),
            DomError::WrongType(selector) => write!(f, "Unexpected element type: {selector}"),
            DomError::Js(e) => write!(f, "JsError: {e:?}"),
        }
    }
}

impl std::error::Error for DomError {}

const ID_INPUT: &str = "input[name=\"id\"]";
const BUTTON: &str = "indexingButton";
const ICON: &str = "indexingIcon";

/// Elements of the page the controller works with.
pub struct DomPage {
    pub id_input: HtmlInputElement,
    pub button: HtmlElement,
    pub icon: Element,
}

impl DomPage {
    pub fn find() -> Result<DomPage, DomError> {
        let document = wndw().document().ok_or(DomError::NoDocument)?;

        let id_input = document
            .query_selector(ID_INPUT).map_err(DomError::Js)?
            .ok_or(DomError::Missing(ID_INPUT))?
            .dyn_into::<HtmlInputElement>().map_err(|_| DomError::WrongType(ID_INPUT))?;
        let button = document
            .get_element_by_id(BUTTON).ok_or(DomError::Missing(BUTTON))?
            .dyn_into::<HtmlElement>().map_err(|_| DomError::WrongType(BUTTON))?;
        let icon = document.get_element_by_id(ICON).ok_or(DomError::Missing(ICON))?;

        Ok(DomPage { id_input, button, icon })
    }

    pub fn handles(&self) -> UiHandles {
        UiHandles {
            id_input: Box::new(IdField(self.id_input.clone())),
            button: Box::new(Button(self.button.clone())),
            icon: Box::new(Icon(self.icon.clone())),
            notifier: Box::new(AlertNotifier),
        }
    }
}

/// The `id` form field.
pub struct IdField(pub HtmlInputElement);

impl IdInput for IdField {
    fn value(&self) -> String {
        self.0.value()
    }
}

pub struct Button(pub HtmlElement);

impl ToggleButton for Button {
    fn label(&self) -> String {
        self.0.inner_text()
    }

    fn set_label(&self, label: &str) {
        self.0.set_inner_text(label)
    }
}

pub struct Icon(pub Element);

impl StatusIcon for Icon {
    fn set_class(&self, class: &str) {
        self.0.set_class_name(class)
    }
}

pub struct ClickEvent(pub Event);

impl UiEvent for ClickEvent {
    fn prevent_default(&self) {
        self.0.prevent_default()
    }
}

/// Notifies with `window.alert`.
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        if let Err(e) = wndw().alert_with_message(message) {
            error!("Failed to show alert {message:?}: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_input<T: IdInput + 'static>() {}
    fn toggle_button<T: ToggleButton + 'static>() {}
    fn status_icon<T: StatusIcon + 'static>() {}
    fn notifier<T: Notifier + 'static>() {}
    fn ui_event<T: UiEvent>() {}

    #[allow(dead_code)]
    fn page_handles(page: &DomPage) -> UiHandles {
        page.handles()
    }

    #[test]
    fn dom_wrappers_are_ui_elements() {
        id_input::<IdField>();
        toggle_button::<Button>();
        status_icon::<Icon>();
        notifier::<AlertNotifier>();
        ui_event::<ClickEvent>();
    }
}
