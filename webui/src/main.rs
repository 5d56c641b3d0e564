mod dom;
mod logger;
mod prelude;
mod util;

use crate::prelude::*;

fn main() {
    ConsoleLogger::new(Level::Info).activate();
    if let Err(e) = start() {
        error!("Indexing controls are disabled: {e}");
    }
}

fn start() -> Result<(), DomError> {
    let page = DomPage::find()?;
    let origin = wndw().location().origin().map_err(DomError::Js)?;
    debug!("Indexing backend is {origin}");

    let button = page.button.clone();
    let controller = Rc::new(IndexingController::new(HttpApi::new(origin), page.handles()));

    let controller2 = Rc::clone(&controller);
    spawn_local(async move {
        let _ = controller2.check_status().await;
    });

    let onclick = Closure::wrap(Box::new(move |event: Event| {
        // Must happen before the handler returns, the toggle itself runs later
        event.prevent_default();
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            let _ = controller.toggle_indexing(&ClickEvent(event)).await;
        });
    }) as Box<dyn FnMut(Event)>);
    button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref()).map_err(DomError::Js)?;
    onclick.forget();

    info!("Indexing controls ready");
    Ok(())
}
