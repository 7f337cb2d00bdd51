//! Browser entry point: `mount_card("card")` from JavaScript.

use swipecard_foundation::{SwipeAction, SwipeActions, SwipeConfig};
use swipecard_platform_web::{init_logging, SwipeCard};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Makes the element with id `element_id` swipeable. Committed swipes are
/// logged to the console. The card lives for the rest of the page.
#[wasm_bindgen]
pub fn mount_card(element_id: &str) -> Result<(), JsValue> {
    init_logging();

    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| format!("element with id '{}' not found", element_id))?
        .dyn_into::<HtmlElement>()?;

    let actions = SwipeActions::new()
        .with_right(SwipeAction::new(|| log::info!("archived")).with_label("Archive"))
        .with_left(SwipeAction::new(|| log::info!("deleted")).with_label("Delete"));
    let card = SwipeCard::mount(element, SwipeConfig::default(), actions)?;
    std::mem::forget(card);
    Ok(())
}
