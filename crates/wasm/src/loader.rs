//! Network image loading with a local placeholder fallback.
//!
//! [`load_image_or_gradient`] suspends until the `<img>` fires `load` or
//! `error`, then resolves with the image or with a freshly painted gradient
//! canvas. A failed fetch is never reported to the caller; it is logged at
//! warn level. The load cannot be cancelled.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlImageElement;

use crate::canvas::create_gradient_canvas;
use crate::source::ImageSource;

/// How an image element finished loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Write side of a one-shot load result. Only the first call to
/// [`LoadSignal::settle`] is delivered; later calls are ignored.
#[derive(Clone)]
pub struct LoadSignal {
    tx: Rc<RefCell<Option<oneshot::Sender<LoadOutcome>>>>,
}

impl LoadSignal {
    /// Delivers `outcome` if nothing was delivered yet. Returns whether this
    /// call settled the load.
    pub fn settle(&self, outcome: LoadOutcome) -> bool {
        match self.tx.borrow_mut().take() {
            Some(tx) => tx.send(outcome).is_ok(),
            None => false,
        }
    }
}

/// Creates a linked signal / receiver pair.
pub fn load_signal() -> (LoadSignal, oneshot::Receiver<LoadOutcome>) {
    let (tx, rx) = oneshot::channel();
    (
        LoadSignal {
            tx: Rc::new(RefCell::new(Some(tx))),
        },
        rx,
    )
}

/// Waits for the signal. A signal dropped without settling counts as a failure.
pub async fn wait_for(rx: oneshot::Receiver<LoadOutcome>) -> LoadOutcome {
    rx.await.unwrap_or(LoadOutcome::Failed)
}

/// Loads `url` as an image, falling back to the gradient placeholder.
///
/// Resolves exactly once. Network and decode failures are recovered; the
/// only error path is a missing DOM (no `Image` constructor or no document
/// to paint the fallback into).
pub async fn load_image_or_gradient(url: &str) -> Result<ImageSource, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_cross_origin(Some("anonymous"));

    let (signal, rx) = load_signal();
    let on_load = {
        let signal = signal.clone();
        Closure::<dyn FnMut()>::new(move || {
            signal.settle(LoadOutcome::Loaded);
        })
    };
    let on_error = Closure::<dyn FnMut()>::new(move || {
        signal.settle(LoadOutcome::Failed);
    });
    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(url);

    let outcome = wait_for(rx).await;

    image.set_onload(None);
    image.set_onerror(None);
    drop(on_load);
    drop(on_error);

    let source = match outcome {
        LoadOutcome::Loaded => ImageSource::Image(image),
        LoadOutcome::Failed => {
            tracing::warn!(url, "image failed to load, using gradient placeholder");
            ImageSource::Canvas(create_gradient_canvas()?)
        }
    };
    tracing::debug!(
        url,
        width = source.width(),
        height = source.height(),
        fallback = source.is_fallback(),
        "background source ready"
    );
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn first_settle_wins() {
        let (signal, rx) = load_signal();
        assert!(signal.settle(LoadOutcome::Loaded));
        assert!(!signal.settle(LoadOutcome::Failed));
        assert_eq!(block_on(wait_for(rx)), LoadOutcome::Loaded);
    }

    #[test]
    fn clones_share_one_delivery() {
        let (signal, rx) = load_signal();
        let other = signal.clone();
        assert!(other.settle(LoadOutcome::Failed));
        assert!(!signal.settle(LoadOutcome::Loaded));
        assert_eq!(block_on(wait_for(rx)), LoadOutcome::Failed);
    }

    #[test]
    fn dropped_signal_resolves_as_failure() {
        let (signal, rx) = load_signal();
        drop(signal);
        assert_eq!(block_on(wait_for(rx)), LoadOutcome::Failed);
    }

    #[test]
    fn settle_after_receiver_dropped_reports_undelivered() {
        let (signal, rx) = load_signal();
        drop(rx);
        assert!(!signal.settle(LoadOutcome::Loaded));
    }
}
