//! Browser image preloading
//!
//! Starts loading every sprite and invokes a callback once all of them have
//! settled. A failed image counts as settled so a missing asset never blocks
//! the game; it just won't be drawn.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlImageElement;

use crate::renderer::Sprite;

/// Load all sprites, then call `on_ready` exactly once with the image table
pub fn preload_sprites<F>(on_ready: F)
where
    F: FnOnce(HashMap<Sprite, HtmlImageElement>) + 'static,
{
    let mut images = HashMap::new();
    for sprite in Sprite::ALL {
        match HtmlImageElement::new() {
            Ok(img) => {
                images.insert(sprite, img);
            }
            Err(e) => log::warn!("Failed to create image for {:?}: {:?}", sprite, e),
        }
    }

    let total = images.len();
    let settled = Rc::new(Cell::new(0usize));
    let table = images.clone();
    let on_ready: Rc<Cell<Option<F>>> = Rc::new(Cell::new(Some(on_ready)));

    if total == 0 {
        if let Some(cb) = on_ready.take() {
            cb(table);
        }
        return;
    }

    for (sprite, img) in images {
        let settle = {
            let settled = settled.clone();
            let on_ready = on_ready.clone();
            let table = table.clone();
            move |ok: bool| {
                if !ok {
                    log::warn!("Failed to load {}", sprite.path());
                }
                settled.set(settled.get() + 1);
                if settled.get() == total {
                    log::info!("Assets loaded ({} images)", total);
                    if let Some(cb) = on_ready.take() {
                        cb(table.clone());
                    }
                }
            }
        };
        let settle = Rc::new(settle);

        let onload = {
            let settle = settle.clone();
            Closure::<dyn FnMut()>::new(move || (*settle)(true))
        };
        let onerror = {
            let settle = settle.clone();
            Closure::<dyn FnMut()>::new(move || (*settle)(false))
        };
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();

        img.set_src(sprite.path());
    }
}
