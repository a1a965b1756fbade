use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use gloo_utils::window;
use mapty_lib::{geolocation::GeolocationError, Coords};
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{GeolocationPosition, GeolocationPositionError};

type Reply = oneshot::Sender<Result<Coords, GeolocationError>>;

/// Asks the browser for the current position once. Resolves with either the
/// position or the reason it is unknown.
pub async fn current_position() -> Result<Coords, GeolocationError> {
    let geolocation = window()
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let (tx, rx) = oneshot::channel();
    let tx: Rc<RefCell<Option<Reply>>> = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let tx = tx.clone();
        Closure::once_into_js(move |position: GeolocationPosition| {
            let coords = position.coords();
            reply(&tx, Ok(Coords(coords.latitude(), coords.longitude())));
        })
    };
    let on_error = {
        let tx = tx.clone();
        Closure::once_into_js(move |error: GeolocationPositionError| {
            reply(&tx, Err(GeolocationError::from_code(error.code())));
        })
    };

    geolocation
        .get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        )
        .map_err(|_| GeolocationError::Unsupported)?;

    rx.await.unwrap_or(Err(GeolocationError::PositionUnavailable))
}

// Only the first answer counts.
fn reply(tx: &Rc<RefCell<Option<Reply>>>, result: Result<Coords, GeolocationError>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}
