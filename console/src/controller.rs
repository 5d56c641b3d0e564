use crate::prelude::*;

pub const STATUS_FAILED_MESSAGE: &str = "Failed to get the indexing status.";
pub const MISSING_ID_MESSAGE: &str = "No ID given. Please check your request.";
pub const TOGGLE_FAILED_MESSAGE: &str = "Failed to change the indexing status.";

#[derive(Debug)]
pub enum ToggleError {
    MissingId,
    /// Another toggle request of this controller hasn't completed yet.
    Busy,
    Api(ApiError),
}

impl From<ApiError> for ToggleError {
    fn from(e: ApiError) -> Self {
        ToggleError::Api(e)
    }
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleError::MissingId => write!(f, "MissingId"),
            ToggleError::Busy => write!(f, "Busy"),
            ToggleError::Api(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ToggleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToggleError::Api(e) => Some(e),
            _ => None,
        }
    }
}

struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<InFlight<'a>> {
        if flag.replace(true) {
            return None;
        }
        Some(InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Drives the status icon and the start/stop button.
///
/// The offered action is owned here and the button label is rendered from
/// it. It is read from the button only once, in [`IndexingController::new`].
pub struct IndexingController<A> {
    api: A,
    ui: UiHandles,
    action: Cell<IndexingAction>,
    in_flight: Cell<bool>,
}

impl<A: IndexingApi> IndexingController<A> {
    pub fn new(api: A, ui: UiHandles) -> IndexingController<A> {
        let label = ui.button.label();
        let action = IndexingAction::from_label(&label);
        if label != action.label() {
            debug!("Unexpected button label {label:?}, treating it as {:?}", action.label());
            ui.button.set_label(action.label());
        }

        IndexingController {
            api,
            ui,
            action: Cell::new(action),
            in_flight: Cell::new(false),
        }
    }

    /// The action the next toggle will request.
    pub fn action(&self) -> IndexingAction {
        self.action.get()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetches the status once and recolours the icon.
    ///
    /// On failure the icon is left as it was and the user is notified.
    pub async fn check_status(&self) -> Result<IndexingStatus, ApiError> {
        match self.api.status().await {
            Ok(status) => {
                let indicator = status.indicator();
                trace!("Indexing status {status:?}, indicator {indicator}");
                self.ui.icon.set_class(indicator.class());
                Ok(status)
            }
            Err(e) => {
                error!("Failed to get indexing status: {e}");
                self.ui.notifier.alert(STATUS_FAILED_MESSAGE);
                Err(e)
            }
        }
    }

    /// Requests the action offered by the button for the id in the form.
    ///
    /// On success the button switches to the opposite action and the status
    /// is checked once. Returns the action now offered.
    pub async fn toggle_indexing(&self, event: &dyn UiEvent) -> Result<IndexingAction, ToggleError> {
        event.prevent_default();

        let id = self.ui.id_input.value().trim().to_string();
        if id.is_empty() {
            warn!("Toggle requested without an id");
            self.ui.notifier.alert(MISSING_ID_MESSAGE);
            return Err(ToggleError::MissingId);
        }

        let Some(in_flight) = InFlight::acquire(&self.in_flight) else {
            warn!("Ignoring toggle for {id}: a request is already in flight");
            return Err(ToggleError::Busy);
        };

        let action = self.action.get();
        info!("Requesting indexing {action} for {id}");
        if let Err(e) = self.api.toggle(action, &ToggleRequest { id }).await {
            error!("Failed to {action} indexing: {e}");
            self.ui.notifier.alert(TOGGLE_FAILED_MESSAGE);
            return Err(e.into());
        }

        let next = action.toggled();
        self.action.set(next);
        self.ui.button.set_label(next.label());
        drop(in_flight);

        let _ = self.check_status().await;
        Ok(next)
    }
}

/// Delays between two status checks of a recurring poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub idle: Duration,
    pub busy: Duration,
    pub retry: Duration,
}

impl Default for PollSchedule {
    fn default() -> Self {
        PollSchedule {
            idle: Duration::from_secs(30),
            busy: Duration::from_secs(1),
            retry: Duration::from_secs(1),
        }
    }
}

impl PollSchedule {
    pub fn next_delay(&self, last: &Result<IndexingStatus, ApiError>) -> Duration {
        match last {
            Ok(status) if status.is_in_progress() => self.busy,
            Ok(_) => self.idle,
            Err(_) => self.retry,
        }
    }
}
